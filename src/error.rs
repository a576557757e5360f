//! Error handling for playstack.
//!
//! Provides centralized error types using thiserror. These cover the CLI
//! and configuration surfaces only; phase execution deliberately reports
//! no structured errors (see `executor`).

#![allow(dead_code)] // Error variants and helpers are available for library consumers

use thiserror::Error;

/// Main error type for playstack
#[derive(Error, Debug)]
pub enum PlaystackError {
    /// IO errors (vars file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing vars files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for playstack operations
pub type Result<T> = std::result::Result<T, PlaystackError>;

impl PlaystackError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlaystackError::config("missing vars file");
        assert_eq!(err.to_string(), "Configuration error: missing vars file");

        let err = PlaystackError::general("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlaystackError = io_err.into();
        assert!(matches!(err, PlaystackError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: PlaystackError = json_err.into();
        assert!(matches!(err, PlaystackError::Json(_)));
    }
}
