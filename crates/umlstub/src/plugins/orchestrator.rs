//! Plugin orchestrator for coordinating the generation pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Detector → Parser → Database → Renderer

use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{Database, Detector, Parser, RenderConfig, Renderer, UmlError};
use crate::plugins::uml::{JavaRenderer, ModelDatabase, UmlDetector, UmlParser};

/// Plugin orchestrator that coordinates the entire pipeline
///
/// The orchestrator wires detectors, the parser and the renderer together so
/// callers can run a full pipeline without handling each trait manually.
pub struct Orchestrator {
    detectors: HashMap<String, Box<dyn Detector>>,
    uml_parser: Option<UmlParser>,
    java_renderer: Option<JavaRenderer>,
}

impl Orchestrator {
    /// Create a new empty orchestrator
    pub fn new() -> Self {
        Self {
            detectors: HashMap::new(),
            uml_parser: None,
            java_renderer: None,
        }
    }

    /// Create an orchestrator with the class notation detector, parser and
    /// renderer registered
    pub fn with_uml_plugins() -> Self {
        Self::with_uml_plugins_and_config(RenderConfig::default())
    }

    /// Same as [`Orchestrator::with_uml_plugins`] with custom render options
    pub fn with_uml_plugins_and_config(config: RenderConfig) -> Self {
        let mut orchestrator = Self {
            detectors: HashMap::new(),
            uml_parser: Some(UmlParser::new()),
            java_renderer: Some(JavaRenderer::with_config(config)),
        };
        orchestrator.register_detector("uml".to_string(), Box::new(UmlDetector::new()));
        orchestrator
    }

    /// Register a detector plugin
    pub fn register_detector(&mut self, name: String, detector: Box<dyn Detector>) {
        self.detectors.insert(name, detector);
    }

    /// Get available detector names
    pub fn get_detectors(&self) -> Vec<String> {
        self.detectors.keys().cloned().collect()
    }

    /// Check if the parser and renderer are available
    pub fn has_uml_plugins(&self) -> bool {
        self.uml_parser.is_some() && self.java_renderer.is_some()
    }

    /// Detect the notation of the input text
    pub fn detect_diagram_type(&self, input: &str) -> Result<String> {
        let detect_span = span!(Level::INFO, "detect_diagram_type", input_len = input.len());
        let _enter = detect_span.enter();

        trace!("Starting notation detection");

        for (name, detector) in &self.detectors {
            let confidence = detector.confidence(input);
            trace!(detector = name, confidence, "Checking detector");
            if detector.detect(input) {
                info!(detector = name, confidence, "Detected notation");
                return Ok(name.clone());
            }
        }

        warn!("No suitable detector found for input");
        Err(UmlError::detection_error("No suitable detector found for input").into())
    }

    /// Process input through the complete pipeline
    ///
    /// Runs detector → parser → renderer using registered plugins.
    pub fn process(&self, input: &str) -> Result<Vec<String>> {
        let process_span = span!(Level::INFO, "process_document", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting generation pipeline");

        let detect_span = span!(Level::DEBUG, "pipeline_detect");
        let _detect_enter = detect_span.enter();
        let diagram_type = self.detect_diagram_type(input)?;
        debug!(diagram_type, "Notation detected");
        drop(_detect_enter);

        if diagram_type != "uml" {
            warn!(diagram_type, "Unsupported notation");
            return Err(UmlError::UnknownDiagramType { diagram_type }.into());
        }

        self.process_uml(input)
    }

    /// Parse class notation directly into a database (skip detection)
    pub fn parse_uml(&self, input: &str) -> Result<ModelDatabase> {
        let parse_span = span!(Level::DEBUG, "pipeline_parse");
        let _parse_enter = parse_span.enter();

        let parser = self
            .uml_parser
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No class notation parser available"))?;

        let mut database = ModelDatabase::new();
        parser.parse(input, &mut database)?;
        debug!(
            class_count = database.class_count(),
            enum_count = database.enum_count(),
            "Parsing completed"
        );
        Ok(database)
    }

    /// Process class notation directly (skip detection)
    ///
    /// Useful when the caller already knows the notation.
    pub fn process_uml(&self, input: &str) -> Result<Vec<String>> {
        let uml_span = span!(Level::INFO, "process_uml", input_len = input.len());
        let _enter = uml_span.enter();

        info!("Processing class notation");

        let database = self.parse_uml(input)?;

        let render_span = span!(Level::DEBUG, "pipeline_render");
        let _render_enter = render_span.enter();
        let renderer = self
            .java_renderer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No Java renderer available"))?;

        let output = renderer.render(&database)?;
        debug!(declarations = output.len(), "Rendering completed");
        drop(_render_enter);

        info!("Pipeline completed successfully");
        Ok(output)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrator_creation() {
        let orchestrator = Orchestrator::new();
        assert_eq!(orchestrator.get_detectors().len(), 0);
        assert!(!orchestrator.has_uml_plugins());
    }

    #[test]
    fn test_orchestrator_default() {
        let orchestrator = Orchestrator::default();
        assert!(orchestrator.get_detectors().is_empty());
        assert!(!orchestrator.has_uml_plugins());
    }

    #[test]
    fn test_orchestrator_with_uml_plugins() {
        let orchestrator = Orchestrator::with_uml_plugins();
        assert_eq!(orchestrator.get_detectors(), vec!["uml"]);
        assert!(orchestrator.has_uml_plugins());
    }

    #[test]
    fn test_register_detector() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.register_detector("uml".to_string(), Box::new(UmlDetector::new()));

        assert_eq!(orchestrator.get_detectors(), vec!["uml"]);
        assert!(!orchestrator.has_uml_plugins());
    }

    #[test]
    fn test_detect_diagram_type_with_no_detectors() {
        let orchestrator = Orchestrator::new();
        let result = orchestrator.detect_diagram_type("class A { }");

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Detection error: No suitable detector found for input"
        );
    }

    #[test]
    fn test_detect_diagram_type() {
        let orchestrator = Orchestrator::with_uml_plugins();
        let result = orchestrator.detect_diagram_type("class A { }");
        assert_eq!(result.unwrap(), "uml");
    }

    #[test]
    fn test_process_with_missing_plugins() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.register_detector("uml".to_string(), Box::new(UmlDetector::new()));

        let result = orchestrator.process("class A { }");
        assert_eq!(
            result.unwrap_err().to_string(),
            "No class notation parser available"
        );
    }

    #[test]
    fn test_process_success() {
        let orchestrator = Orchestrator::with_uml_plugins();
        let output = orchestrator
            .process("class A { +int x }\nenum E { ONE }")
            .unwrap();

        assert_eq!(
            output,
            vec![
                "public class A {\n    public int x;\n}".to_string(),
                "public enum E {\n    ONE\n}".to_string(),
            ]
        );
    }

    #[test]
    fn test_process_accepts_tab_after_keyword() {
        let orchestrator = Orchestrator::with_uml_plugins();
        let output = orchestrator.process("class\tPoint {\n  +int x\n}").unwrap();

        assert_eq!(output, vec!["public class Point {\n    public int x;\n}".to_string()]);
    }

    #[test]
    fn test_process_unrecognized_text() {
        let orchestrator = Orchestrator::with_uml_plugins();
        let result = orchestrator.process("This is just plain text");

        assert!(result.is_err());
        // Skipping detection stays total
        assert!(orchestrator.process_uml("This is just plain text").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_diagram_type() {
        struct Always;
        impl Detector for Always {
            fn detect(&self, _input: &str) -> bool {
                true
            }
            fn confidence(&self, _input: &str) -> f64 {
                1.0
            }
            fn diagram_type(&self) -> &'static str {
                "other"
            }
            fn patterns(&self) -> Vec<&'static str> {
                Vec::new()
            }
        }

        let mut orchestrator = Orchestrator::new();
        orchestrator.register_detector("other".to_string(), Box::new(Always));

        let err = orchestrator.process("anything").unwrap_err();
        assert_eq!(err.to_string(), "Unknown diagram type: other");
    }

    #[test]
    fn test_custom_config() {
        let orchestrator = Orchestrator::with_uml_plugins_and_config(RenderConfig::new(2));
        let output = orchestrator.process_uml("enum E { A }").unwrap();
        assert_eq!(output, vec!["public enum E {\n  A\n}".to_string()]);
    }

    #[test]
    fn test_parse_uml() {
        let orchestrator = Orchestrator::with_uml_plugins();
        let db = orchestrator.parse_uml("class A { }\nclass B { }\nA -- B").unwrap();
        assert_eq!(db.class_count(), 2);
        assert_eq!(db.enum_count(), 0);
    }
}
