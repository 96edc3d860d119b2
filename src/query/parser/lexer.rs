// SQL Lexer Implementation
//
// This module splits a statement into plain token strings. Keywords, names,
// integers and operators are all left as text; the parser decides what a
// token means from its position in the grammar.

use std::iter::Peekable;
use std::str::Chars;

use log::trace;
use thiserror::Error;

use super::keywords::{is_quote_delimiter, is_single_char_token, ESCAPE};

/// Lexing failure; `offset` is the character offset the problem starts at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at position {offset}")]
pub struct LexError {
    pub message: String,
    pub offset: usize,
}

impl LexError {
    fn unterminated(offset: usize) -> Self {
        LexError {
            message: "unterminated quoted identifier".to_string(),
            offset,
        }
    }
}

/// Result type for lexing operations
pub type LexResult<T> = Result<T, LexError>;

/// Lexer for breaking a statement into token strings
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    offset: usize,
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over a statement
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars().peekable(),
            offset: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// Advance to the next character. `offset` always points at `ch`.
    fn read_char(&mut self) -> Option<char> {
        if self.ch.is_some() {
            self.offset += 1;
        }
        self.ch = self.input.next();
        self.ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.ch {
            if !ch.is_whitespace() {
                break;
            }
            self.read_char();
        }
    }

    /// Read a delimited identifier, delimiters and escapes included.
    fn read_quoted(&mut self, delimiter: char) -> LexResult<String> {
        let start = self.offset;
        let mut token = String::from(delimiter);
        let mut escaped = false;

        self.read_char();
        loop {
            let ch = match self.ch {
                Some(ch) => ch,
                None => return Err(LexError::unterminated(start)),
            };
            token.push(ch);
            self.read_char();

            if escaped {
                escaped = false;
            } else if ch == ESCAPE {
                escaped = true;
            } else if ch == delimiter {
                return Ok(token);
            }
        }
    }

    /// Read a maximal run of non-whitespace, non-punctuation characters
    fn read_bare(&mut self) -> String {
        let mut token = String::new();
        while let Some(ch) = self.ch {
            if ch.is_whitespace() || is_single_char_token(ch) {
                break;
            }
            token.push(ch);
            self.read_char();
        }
        token
    }

    /// Get the next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> LexResult<Option<String>> {
        self.skip_whitespace();

        let token = match self.ch {
            None => return Ok(None),
            Some(ch) if is_quote_delimiter(ch) => self.read_quoted(ch)?,
            Some(ch) if is_single_char_token(ch) => {
                self.read_char();
                ch.to_string()
            }
            Some(_) => self.read_bare(),
        };

        trace!("Lexed token {:?} ending at offset {}", token, self.offset);
        Ok(Some(token))
    }

    /// Consume the whole input into a token list
    pub fn tokenize(mut self) -> LexResult<Vec<String>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> LexResult<Vec<String>> {
    Lexer::new(input).tokenize()
}
