// Query Processing Module
//
// This module contains the SQL parser, the query serializers and the
// translator that connects them.

pub mod parser;
pub mod serializer;
pub mod translator;

// Export key public interfaces
pub use parser::Parser;
pub use serializer::{MongoSerializer, QuerySerializer};
pub use translator::Translator;
