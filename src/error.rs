//! Custom error types for otchetnik
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for otchetnik operations
#[derive(Error, Debug)]
pub enum OtchetnikError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for persisted data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A single operation was rejected because of bad input
    /// (stale answer id, unsupported period unit, unparseable date)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session state no longer matches the survey graph. Should never
    /// happen with well-formed data; fatal to the session when it does.
    #[error("State corruption: {0}")]
    StateCorruption(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl OtchetnikError {
    /// Create a "not found" error for surveys
    pub fn survey_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Survey",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for survey questions
    pub fn question_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Question",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for FAQ categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "FAQ category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a recoverable bad-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this error is fatal to the active session
    pub fn is_state_corruption(&self) -> bool {
        matches!(self, Self::StateCorruption(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for OtchetnikError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OtchetnikError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for otchetnik operations
pub type OtchetnikResult<T> = Result<T, OtchetnikError>;
