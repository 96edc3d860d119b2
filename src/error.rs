// Translation Errors
//
// Crate-level error type wrapping the failure of each pipeline stage.

use std::fmt;

use thiserror::Error;

use crate::query::parser::lexer::LexError;
use crate::query::parser::parser::ParseError;
use crate::query::serializer::SerializeError;

/// Coarse classification of a translation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token stream
    Lex,
    /// Tokens do not match the grammar
    Syntax,
    /// OFFSET or LIMIT value out of range
    Range,
    /// Valid SQL the translator cannot express yet
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lex => "lex error",
            ErrorKind::Syntax => "syntax error",
            ErrorKind::Range => "range error",
            ErrorKind::Unsupported => "unsupported feature",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Parse(err) => err.kind(),
            Error::Serialize(err) => err.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
