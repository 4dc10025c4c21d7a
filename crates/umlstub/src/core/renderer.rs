//! Core renderer trait for declaration output
//!
//! This trait defines the interface for turning a populated database into
//! target-language source text.

use anyhow::Result;

use super::Database;

/// Core trait for declaration renderers
///
/// # Example
/// ```
/// use umlstub::core::Renderer;
/// use umlstub::plugins::uml::{JavaRenderer, ModelDatabase};
///
/// let db = ModelDatabase::new();
/// let renderer = JavaRenderer::new();
/// let output = renderer.render(&db).unwrap();
/// assert!(output.is_empty());
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the target language of the output
    fn format(&self) -> &'static str;
}
