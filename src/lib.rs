// mongosql: SQL SELECT to MongoDB query translator

pub mod config;
pub mod error;
pub mod query;

// Re-export key items for convenient access
pub use config::{TrailingTokens, TranslatorConfig};
pub use error::{Error, ErrorKind};
pub use query::parser::ast::SelectStatement;
pub use query::translator::{translate, Translator};
