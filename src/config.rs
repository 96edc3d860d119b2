// Translator Configuration
//
// Options that change how statements are parsed and rendered.

use serde::{Deserialize, Serialize};

/// Name of the shell variable holding the database handle
pub const DEFAULT_DATABASE: &str = "db";

/// What to do with tokens left over after a complete statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingTokens {
    /// Report them as a syntax error
    #[default]
    Reject,
    /// Log a warning and drop them
    Ignore,
}

/// Configuration for a `Translator`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Prefix of every rendered query (`db` in `db.users.find({})`)
    pub database: String,
    pub trailing_tokens: TrailingTokens,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            database: DEFAULT_DATABASE.to_string(),
            trailing_tokens: TrailingTokens::Reject,
        }
    }
}

impl TranslatorConfig {
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_trailing_tokens(mut self, trailing_tokens: TrailingTokens) -> Self {
        self.trailing_tokens = trailing_tokens;
        self
    }
}
