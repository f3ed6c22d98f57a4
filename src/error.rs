//! Error types for text and file analysis
//!
//! Scoring itself never fails; these cover reading input and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input exceeds the configured size limit
    #[error("Input too large: {size} bytes (limit {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    /// File extension is not accepted
    #[error("Unsupported file: {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Unsupported configuration format
    #[error("Unsupported config format: {0}")]
    UnsupportedConfigFormat(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if the error was caused by the input itself rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputTooLarge { .. } | Error::UnsupportedFile(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InputTooLarge { size: 12_000, limit: 10_000 };
        assert_eq!(err.to_string(), "Input too large: 12000 bytes (limit 10000 bytes)");

        let err = Error::UnsupportedFile(PathBuf::from("notes.pdf"));
        assert_eq!(err.to_string(), "Unsupported file: notes.pdf");
    }

    #[test]
    fn test_input_errors() {
        assert!(Error::UnsupportedFile(PathBuf::from("a.pdf")).is_input_error());
        assert!(!Error::Config("bad".to_string()).is_input_error());
    }
}
