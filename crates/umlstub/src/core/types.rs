//! Core type definitions shared across plugins

use std::fmt;

use super::UmlError;

/// Widest indent accepted by [`RenderConfig::validate`]
pub const MAX_INDENT: usize = 16;

/// Rendering options
///
/// Controls the layout of generated declarations. The default matches the
/// conventional four-space Java indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Number of spaces before each member line
    pub indent: usize,
}

impl RenderConfig {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    /// Reject configurations the renderer should not be asked to honour
    pub fn validate(&self) -> Result<(), UmlError> {
        if self.indent > MAX_INDENT {
            return Err(UmlError::config_error(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        Ok(())
    }

    /// The indent as a string of spaces
    pub fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indent={}", self.indent)
    }
}
