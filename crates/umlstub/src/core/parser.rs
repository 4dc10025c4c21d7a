//! Core parser trait for DSL text
//!
//! This trait defines the interface for turning DSL text into descriptors
//! stored in a database.

use anyhow::Result;

use super::Database;

/// Core trait for DSL parsers
///
/// Implementations are expected to be total over their input: text they do
/// not understand is skipped, not reported.
///
/// # Example
/// ```
/// use umlstub::core::{Database, Parser};
/// use umlstub::plugins::uml::{ModelDatabase, UmlParser};
///
/// let parser = UmlParser::new();
/// let mut db = ModelDatabase::new();
/// parser.parse("class A { }", &mut db).unwrap();
/// assert_eq!(db.class_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse DSL text into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input can be parsed by this parser
    fn can_parse(&self, input: &str) -> bool;
}
