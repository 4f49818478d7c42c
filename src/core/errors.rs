//! Shared error types for the application

use crate::observability::AnalysisPhase;
use std::path::PathBuf;
use thiserror::Error;

/// Message returned to callers for any internal fault. The detail is logged,
/// never sent back.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error while analyzing text";

/// Main error type for sentimap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Request carried no payload at all
    #[error("No JSON data received")]
    MissingPayload,

    /// Text field missing, empty or blank
    #[error("No text provided")]
    EmptyText,

    /// Payload present but malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Classifier used before the engine finished initializing
    #[error("Sentiment engine is not initialized")]
    NotReady,

    /// Fault caught while scoring or classifying
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        phase: Option<AnalysisPhase>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed lexicon source
    #[error("Lexicon error at line {line}: {message}")]
    Lexicon { line: usize, message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    pub fn internal(message: impl Into<String>, phase: Option<AnalysisPhase>) -> Self {
        Self::Internal {
            message: message.into(),
            phase,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Self::Lexicon {
            line,
            message: message.into(),
        }
    }

    /// Errors caused by what the caller sent rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingPayload | Self::EmptyText | Self::InvalidRequest(_)
        )
    }

    /// HTTP-equivalent status for the error.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        }
    }
}

/// Result type alias for sentimap operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(Error::EmptyText.status_code(), 400);
        assert_eq!(Error::MissingPayload.status_code(), 400);
        assert_eq!(Error::InvalidRequest("bad".into()).status_code(), 400);
    }

    #[test]
    fn test_internal_errors_map_to_500() {
        let err = Error::internal("boom", Some(AnalysisPhase::Scoring));
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
        assert_eq!(Error::NotReady.status_code(), 500);
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = Error::internal("index out of bounds at lexicon.rs:12", None);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert_eq!(Error::EmptyText.public_message(), "No text provided");
    }

    #[test]
    fn test_lexicon_error_display() {
        let err = Error::lexicon(7, "missing valence");
        assert_eq!(err.to_string(), "Lexicon error at line 7: missing valence");
    }
}
