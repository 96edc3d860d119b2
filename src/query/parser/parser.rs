// SQL Parser Implementation
//
// This module implements a recursive descent parser that turns the token
// strings produced by the lexer into a `SelectStatement`. The grammar is
// LL(1): one forward cursor, one token of lookahead, no backtracking.

use log::{debug, warn};
use thiserror::Error;

use super::ast::*;
use super::keywords::{is_keyword, is_quote_delimiter, matches_keyword, COMMA, WILDCARD};
use crate::config::TrailingTokens;
use crate::error::ErrorKind;

/// SQL parsing errors. Every variant carries the index of the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected}, found '{found}' at token {index}")]
    ExpectedToken {
        expected: String,
        found: String,
        index: usize,
    },
    #[error("Expected {expected}, found end of input at token {index}")]
    UnexpectedEnd { expected: String, index: usize },
    #[error("Expected name, found keyword '{keyword}' at token {index}")]
    KeywordAsName { keyword: String, index: usize },
    #[error("Invalid name '{found}' at token {index}: {reason}")]
    InvalidName {
        found: String,
        reason: &'static str,
        index: usize,
    },
    #[error("Expected integer, found '{found}' at token {index}")]
    InvalidInteger { found: String, index: usize },
    #[error("{clause} {value} cannot be negative (token {index})")]
    NegativeValue {
        clause: &'static str,
        value: i64,
        index: usize,
    },
    #[error("{feature} is not supported (token {index})")]
    Unsupported { feature: &'static str, index: usize },
    #[error("Unexpected token '{found}' after end of statement at token {index}")]
    TrailingTokens { found: String, index: usize },
}

impl ParseError {
    /// Index of the token the error refers to
    pub fn index(&self) -> usize {
        match self {
            ParseError::ExpectedToken { index, .. }
            | ParseError::UnexpectedEnd { index, .. }
            | ParseError::KeywordAsName { index, .. }
            | ParseError::InvalidName { index, .. }
            | ParseError::InvalidInteger { index, .. }
            | ParseError::NegativeValue { index, .. }
            | ParseError::Unsupported { index, .. }
            | ParseError::TrailingTokens { index, .. } => *index,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NegativeValue { .. } => ErrorKind::Range,
            ParseError::Unsupported { .. } => ErrorKind::Unsupported,
            _ => ErrorKind::Syntax,
        }
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser for constructing a `SelectStatement` from token strings
pub struct Parser<'t, S: AsRef<str>> {
    tokens: &'t [S],
    position: usize,
    trailing_tokens: TrailingTokens,
}

impl<'t, S: AsRef<str>> Parser<'t, S> {
    /// Create a parser over a token sequence; trailing tokens are rejected.
    pub fn new(tokens: &'t [S]) -> Self {
        Parser {
            tokens,
            position: 0,
            trailing_tokens: TrailingTokens::default(),
        }
    }

    pub fn with_trailing_tokens(mut self, trailing_tokens: TrailingTokens) -> Self {
        self.trailing_tokens = trailing_tokens;
        self
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.position
    }

    fn current(&self) -> Option<&'t str> {
        let tokens: &'t [S] = self.tokens;
        tokens.get(self.position).map(|token| token.as_ref())
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn current_is_keyword(&self, keyword: &str) -> bool {
        self.current()
            .map(|token| matches_keyword(token, keyword))
            .unwrap_or(false)
    }

    /// Return the current token or fail naming what was expected
    fn require(&self, expected: &str) -> ParseResult<&'t str> {
        self.current().ok_or_else(|| ParseError::UnexpectedEnd {
            expected: expected.to_string(),
            index: self.position,
        })
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        let token = self.require(keyword)?;
        if !matches_keyword(token, keyword) {
            return Err(ParseError::ExpectedToken {
                expected: keyword.to_string(),
                found: token.to_string(),
                index: self.position,
            });
        }
        self.advance();
        Ok(())
    }

    /// Parse a complete SELECT statement
    pub fn parse_select(&mut self) -> ParseResult<SelectStatement> {
        self.expect_keyword("SELECT")?;
        let columns = self.parse_columns()?;
        self.expect_keyword("FROM")?;
        let table = self.parse_name("table name")?;

        let mut statement = SelectStatement {
            table,
            columns,
            condition: None,
            offset: None,
            limit: None,
        };

        if self.current().is_none() {
            debug!("Parsed SELECT from '{}'", statement.table.name);
            return Ok(statement);
        }

        if self.current_is_keyword("WHERE") {
            return Err(ParseError::Unsupported {
                feature: "WHERE clause",
                index: self.position,
            });
        }

        if self.current_is_keyword("OFFSET") {
            self.advance();
            statement.offset = Some(self.parse_count("OFFSET")?);
        }

        if self.current_is_keyword("LIMIT") {
            self.advance();
            statement.limit = Some(self.parse_count("LIMIT")?);
        }

        self.finish()?;
        debug!(
            "Parsed SELECT from '{}' (offset {:?}, limit {:?})",
            statement.table.name, statement.offset, statement.limit
        );
        Ok(statement)
    }

    /// `*` or a comma separated list of names
    fn parse_columns(&mut self) -> ParseResult<Option<IdentifierList>> {
        let token = self.require("column list")?;
        if token == WILDCARD {
            self.advance();
            return Ok(None);
        }

        let start = self.position;
        let mut names = vec![self.parse_name("column name")?];
        while self.current() == Some(COMMA) {
            self.advance();
            names.push(self.parse_name("column name")?);
        }

        IdentifierList::new(names)
            .map(Some)
            .ok_or_else(|| ParseError::UnexpectedEnd {
                expected: "column name".to_string(),
                index: start,
            })
    }

    fn parse_name(&mut self, expected: &str) -> ParseResult<Identifier> {
        let token = self.require(expected)?;
        let identifier = parse_identifier(token, self.position)?;
        self.advance();
        Ok(identifier)
    }

    /// Non-negative integer argument of OFFSET or LIMIT
    fn parse_count(&mut self, clause: &'static str) -> ParseResult<u64> {
        let index = self.position;
        let token = self.require("integer")?;
        let value: i64 = token.parse().map_err(|_| ParseError::InvalidInteger {
            found: token.to_string(),
            index,
        })?;
        let count = u64::try_from(value).map_err(|_| ParseError::NegativeValue {
            clause,
            value,
            index,
        })?;
        self.advance();
        Ok(count)
    }

    /// Parse a comparison operator token (`>`, `<`, `>=`, `<=`, `=`, `<>`)
    pub fn parse_comparison_operator(&mut self) -> ParseResult<ComparisonOperator> {
        let token = self.require("comparison operator")?;
        let op = ComparisonOperator::from_symbol(token).ok_or_else(|| ParseError::ExpectedToken {
            expected: "comparison operator".to_string(),
            found: token.to_string(),
            index: self.position,
        })?;
        self.advance();
        Ok(op)
    }

    /// Parse a binary logical operator (`AND`, `OR`)
    pub fn parse_logical_operator(&mut self) -> ParseResult<LogicalOperator> {
        let token = self.require("AND or OR")?;
        match LogicalOperator::from_keyword(token) {
            Some(op @ (LogicalOperator::And | LogicalOperator::Or)) => {
                self.advance();
                Ok(op)
            }
            _ => Err(ParseError::ExpectedToken {
                expected: "AND or OR".to_string(),
                found: token.to_string(),
                index: self.position,
            }),
        }
    }

    /// Consume a `NOT` keyword
    pub fn parse_not(&mut self) -> ParseResult<LogicalOperator> {
        self.expect_keyword(LogicalOperator::Not.keyword())?;
        Ok(LogicalOperator::Not)
    }

    fn finish(&mut self) -> ParseResult<()> {
        let Some(token) = self.current() else {
            return Ok(());
        };

        match self.trailing_tokens {
            TrailingTokens::Reject => Err(ParseError::TrailingTokens {
                found: token.to_string(),
                index: self.position,
            }),
            TrailingTokens::Ignore => {
                warn!(
                    "Ignoring {} trailing token(s) starting with '{}' at token {}",
                    self.tokens.len() - self.position,
                    token,
                    self.position
                );
                self.position = self.tokens.len();
                Ok(())
            }
        }
    }
}

/// Turn a single token into an identifier.
///
/// A token opening with a quote delimiter must be closed by the same
/// delimiter; the text between them is kept as is, escapes included.
/// Bare tokens must not be reserved words or punctuation.
pub fn parse_identifier(token: &str, index: usize) -> ParseResult<Identifier> {
    let Some(first) = token.chars().next() else {
        return Err(ParseError::InvalidName {
            found: String::new(),
            reason: "empty token",
            index,
        });
    };

    if is_quote_delimiter(first) {
        let inner = &token[first.len_utf8()..];
        return match inner.strip_suffix(first) {
            Some(name) => Ok(Identifier::quoted(name)),
            None => Err(ParseError::InvalidName {
                found: token.to_string(),
                reason: "missing closing delimiter",
                index,
            }),
        };
    }

    if token == COMMA || token == WILDCARD {
        return Err(ParseError::InvalidName {
            found: token.to_string(),
            reason: "punctuation cannot be used as a name",
            index,
        });
    }

    if is_keyword(token) {
        return Err(ParseError::KeywordAsName {
            keyword: token.to_string(),
            index,
        });
    }

    Ok(Identifier::bare(token))
}

/// Parse a token sequence into a SELECT statement, rejecting trailing tokens.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ParseResult<SelectStatement> {
    Parser::new(tokens).parse_select()
}
