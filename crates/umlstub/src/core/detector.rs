//! Core detector trait for input identification

/// Core trait for DSL detectors
///
/// Detectors give a cheap, heuristic answer to "does this text look like my
/// notation" before a full parse is attempted.
pub trait Detector: Send + Sync {
    /// Detect if the input matches this notation
    fn detect(&self, input: &str) -> bool;

    /// Get the confidence level of the detection (0.0 to 1.0)
    fn confidence(&self, input: &str) -> f64;

    /// Get the notation name
    fn diagram_type(&self) -> &'static str;

    /// Get key patterns that this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
