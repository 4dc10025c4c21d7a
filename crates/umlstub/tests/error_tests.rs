//! Tests for core error types

use umlstub::core::UmlError;
use umlstub::RenderConfig;

#[test]
fn test_config_error() {
    let error = UmlError::config_error("indent too wide");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Configuration error"));
    assert!(error_msg.contains("indent too wide"));
}

#[test]
fn test_detection_error() {
    let error = UmlError::detection_error("Detection failed");
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Detection error"));
    assert!(error_msg.contains("Detection failed"));
}

#[test]
fn test_empty_model() {
    assert_eq!(
        UmlError::EmptyModel.to_string(),
        "No class or enum declarations found"
    );
}

#[test]
fn test_unknown_diagram_type() {
    let error = UmlError::UnknownDiagramType {
        diagram_type: "sequence".to_string(),
    };
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Unknown diagram type"));
    assert!(error_msg.contains("sequence"));
}

#[test]
fn test_io_error() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error: UmlError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("File not found"));
}

#[test]
fn test_error_converts_to_anyhow() {
    let result: anyhow::Result<()> = Err(UmlError::EmptyModel.into());
    let error = result.unwrap_err();
    assert!(error.downcast_ref::<UmlError>().is_some());
}

#[test]
fn test_invalid_render_config() {
    let error = RenderConfig::new(17).validate().unwrap_err();
    assert!(matches!(error, UmlError::ConfigError { .. }));
    assert!(error.to_string().contains("indent must be at most 16, got 17"));
}
