// SQL Parser Module
//
// This module is responsible for tokenizing SELECT statements and parsing
// them into an abstract syntax tree (AST) representation.

pub mod ast;
pub mod keywords;
pub mod lexer;
pub mod parser;

// Export key types
pub use self::ast::{Condition, Identifier, IdentifierList, SelectStatement};
pub use self::lexer::{tokenize, LexError, Lexer};
pub use self::parser::{parse, ParseError, Parser};
