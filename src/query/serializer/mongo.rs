// MongoDB Shell Serializer
//
// Renders statements as `db.collection.find(filter, projection)` calls with
// an optional `.skip(n).limit(m)` chain.

use log::debug;

use super::{QuerySerializer, SerializeError, SerializeResult};
use crate::config::DEFAULT_DATABASE;
use crate::query::parser::ast::{Condition, Identifier, IdentifierList, SelectStatement};

/// Serializer producing MongoDB shell queries
#[derive(Debug, Clone)]
pub struct MongoSerializer {
    database: String,
}

impl Default for MongoSerializer {
    fn default() -> Self {
        MongoSerializer::new(DEFAULT_DATABASE)
    }
}

impl MongoSerializer {
    pub fn new(database: impl Into<String>) -> Self {
        MongoSerializer {
            database: database.into(),
        }
    }

    /// Quoted names may contain spaces, so they need bracket access.
    fn collection(&self, table: &Identifier) -> String {
        if table.quoted {
            format!("{}['{}']", self.database, table.name)
        } else {
            format!("{}.{}", self.database, table.name)
        }
    }

    fn filter(&self, condition: Option<&Condition>) -> SerializeResult<String> {
        match condition {
            None => Ok("{}".to_string()),
            Some(condition) => {
                debug!("Cannot serialize condition '{}'", condition);
                Err(SerializeError::Unsupported("WHERE".to_string()))
            }
        }
    }

    fn projection(&self, columns: &IdentifierList) -> String {
        let fields: Vec<String> = columns
            .iter()
            .map(|column| {
                if column.quoted {
                    format!("'{}': 1", column.name)
                } else {
                    format!("{}: 1", column.name)
                }
            })
            .collect();
        format!("{{{}}}", fields.join(","))
    }
}

impl QuerySerializer for MongoSerializer {
    fn serialize(&self, statement: &SelectStatement) -> SerializeResult<String> {
        let mut arguments = self.filter(statement.condition.as_ref())?;
        if let Some(columns) = &statement.columns {
            arguments.push_str(", ");
            arguments.push_str(&self.projection(columns));
        }

        let mut query = format!("{}.find({})", self.collection(&statement.table), arguments);
        if let Some(offset) = statement.offset {
            query.push_str(&format!(".skip({})", offset));
        }
        if let Some(limit) = statement.limit {
            query.push_str(&format!(".limit({})", limit));
        }

        Ok(query)
    }
}
