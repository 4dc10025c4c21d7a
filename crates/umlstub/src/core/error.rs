//! Core error types
//!
//! The parsing pipeline itself never fails on malformed input. These errors
//! cover everything around it: configuration, IO and detection.

use thiserror::Error;

/// Errors raised outside the total parse/render pipeline
#[derive(Error, Debug)]
pub enum UmlError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Detection error: {message}")]
    DetectionError { message: String },

    #[error("No class or enum declarations found")]
    EmptyModel,

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Unknown diagram type: {diagram_type}")]
    UnknownDiagramType { diagram_type: String },
}

impl UmlError {
    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new detection error
    pub fn detection_error(message: impl Into<String>) -> Self {
        Self::DetectionError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        let error_msg = format!("{}", UmlError::EmptyModel);
        assert!(error_msg.contains("No class or enum"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: UmlError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
