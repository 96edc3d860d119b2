// Query Serializer Module
//
// This module renders a parsed statement in a target query language.

pub mod mongo;

use thiserror::Error;

use crate::error::ErrorKind;
use crate::query::parser::ast::SelectStatement;

pub use mongo::MongoSerializer;

/// Serialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("{0} is not supported")]
    Unsupported(String),
}

impl SerializeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerializeError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

/// Result type for serialization
pub type SerializeResult<T> = Result<T, SerializeError>;

/// The QuerySerializer trait is implemented by every target query language.
/// Serializers hold no mutable state and can be shared between threads.
pub trait QuerySerializer: Send + Sync {
    /// Render a complete statement
    fn serialize(&self, statement: &SelectStatement) -> SerializeResult<String>;
}
