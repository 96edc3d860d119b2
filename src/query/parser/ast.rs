// SQL Abstract Syntax Tree (AST) Implementation
//
// This module defines the AST nodes for a parsed SELECT statement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A table or column name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    /// Whether the name was written between delimiters in the source
    pub quoted: bool,
}

impl Identifier {
    pub fn bare(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            quoted: false,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            quoted: true,
        }
    }
}

/// Non-empty, ordered list of identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Identifier>", into = "Vec<Identifier>")]
pub struct IdentifierList(Vec<Identifier>);

impl IdentifierList {
    /// Returns `None` for an empty list.
    pub fn new(identifiers: Vec<Identifier>) -> Option<Self> {
        if identifiers.is_empty() {
            None
        } else {
            Some(IdentifierList(identifiers))
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> &Identifier {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }
}

impl TryFrom<Vec<Identifier>> for IdentifierList {
    type Error = &'static str;

    fn try_from(identifiers: Vec<Identifier>) -> Result<Self, Self::Error> {
        IdentifierList::new(identifiers).ok_or("identifier list must not be empty")
    }
}

impl From<IdentifierList> for Vec<Identifier> {
    fn from(list: IdentifierList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a IdentifierList {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
    Equals,
    NotEqual,
}

impl ComparisonOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ">" => Some(ComparisonOperator::GreaterThan),
            "<" => Some(ComparisonOperator::LessThan),
            ">=" => Some(ComparisonOperator::GreaterEqual),
            "<=" => Some(ComparisonOperator::LessEqual),
            "=" => Some(ComparisonOperator::Equals),
            "<>" => Some(ComparisonOperator::NotEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::GreaterEqual => ">=",
            ComparisonOperator::LessEqual => "<=",
            ComparisonOperator::Equals => "=",
            ComparisonOperator::NotEqual => "<>",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
    Not,
}

impl LogicalOperator {
    /// Case-insensitive lookup
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Some(LogicalOperator::And),
            "OR" => Some(LogicalOperator::Or),
            "NOT" => Some(LogicalOperator::Not),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Not => "NOT",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Boolean filter expression of a WHERE clause.
///
/// The parser does not build these yet; the type exists so the serializer
/// can reject conditions explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// `left AND right`, `left OR right`
    Logical {
        left: Box<Condition>,
        op: LogicalOperator,
        right: Box<Condition>,
    },
    /// `NOT inner`
    Not(Box<Condition>),
    /// `left <op> right`
    Comparison {
        left: Identifier,
        op: ComparisonOperator,
        right: Identifier,
    },
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Condition::Logical { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Condition::Not(inner) => write!(f, "NOT {}", inner),
            Condition::Comparison { left, op, right } => {
                write!(f, "{} {} {}", left.name, op, right.name)
            }
        }
    }
}

/// SELECT statement representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub table: Identifier,
    /// Explicit projection; `None` selects every column (`*`)
    pub columns: Option<IdentifierList>,
    pub condition: Option<Condition>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl SelectStatement {
    /// `SELECT * FROM table` with no optional clauses
    pub fn all_from(table: Identifier) -> Self {
        SelectStatement {
            table,
            columns: None,
            condition: None,
            offset: None,
            limit: None,
        }
    }
}
