// Statement Translator
//
// Runs the lexer, parser and serializer in sequence. A translator holds only
// its configuration, so one instance can serve any number of threads.

use log::debug;

use crate::config::TranslatorConfig;
use crate::error::Result;
use crate::query::parser::ast::SelectStatement;
use crate::query::parser::lexer::tokenize;
use crate::query::parser::parser::Parser;
use crate::query::serializer::{MongoSerializer, QuerySerializer};

/// Translates SELECT statements into MongoDB shell queries
pub struct Translator {
    config: TranslatorConfig,
    serializer: Box<dyn QuerySerializer>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(TranslatorConfig::default())
    }
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        let serializer = Box::new(MongoSerializer::new(config.database.clone()));
        Translator { config, serializer }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Tokenize and parse a statement without rendering it
    pub fn parse(&self, sql: &str) -> Result<SelectStatement> {
        let tokens = tokenize(sql)?;
        debug!("Tokenized statement into {} tokens", tokens.len());

        let statement = Parser::new(&tokens)
            .with_trailing_tokens(self.config.trailing_tokens)
            .parse_select()?;
        Ok(statement)
    }

    /// Translate one statement
    pub fn translate(&self, sql: &str) -> Result<String> {
        let statement = self.parse(sql)?;
        let query = self.serializer.serialize(&statement)?;
        debug!("Translated '{}' into '{}'", sql, query);
        Ok(query)
    }
}

/// Translate one statement using the default configuration.
pub fn translate(sql: &str) -> Result<String> {
    Translator::default().translate(sql)
}
