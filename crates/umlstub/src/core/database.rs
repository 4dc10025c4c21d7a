//! Core database trait for parsed declarations
//!
//! This trait defines the storage layer sitting between the parser and the
//! renderer. A database keeps classes and enums apart so that renderers can
//! emit every class before any enum.

use anyhow::Result;

/// Core trait for declaration databases
///
/// Each DSL plugin provides its own descriptor types through the associated
/// types. Insertion order is document order and must be preserved.
pub trait Database: Send + Sync {
    /// The class descriptor type for this database
    type Class: Clone + Send + Sync;

    /// The enum descriptor type for this database
    type Enum: Clone + Send + Sync;

    /// Append a class descriptor
    fn add_class(&mut self, class: Self::Class) -> Result<()>;

    /// Append an enum descriptor
    fn add_enum(&mut self, item: Self::Enum) -> Result<()>;

    /// Get the first class with the given name
    fn get_class(&self, name: &str) -> Option<&Self::Class>;

    /// Get the first enum with the given name
    fn get_enum(&self, name: &str) -> Option<&Self::Enum>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of classes
    fn class_count(&self) -> usize;

    /// Get the number of enums
    fn enum_count(&self) -> usize;

    /// Total number of declarations a renderer will emit
    fn declaration_count(&self) -> usize {
        self.class_count() + self.enum_count()
    }

    /// True when nothing was recognized
    fn is_empty(&self) -> bool {
        self.declaration_count() == 0
    }
}
