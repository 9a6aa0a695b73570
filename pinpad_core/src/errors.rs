//! # Error Types
//!
//! Structured error types for pinpad_core. The pad itself never fails at
//! runtime; a wrong PIN is a [`ValidationStatus`](crate::ValidationStatus), not
//! an error. Errors only come from building or loading a configuration.
//!
//! ## Example
//!
//! ```rust
//! use pinpad_core::errors::{PinError, PinResult};
//!
//! fn validate_length(max_length: usize) -> PinResult<()> {
//!     if max_length == 0 {
//!         return Err(PinError::InvalidInput {
//!             field: "max_length".to_string(),
//!             value: max_length.to_string(),
//!             reason: "PIN length must be at least 1".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pinpad_core operations
pub type PinResult<T> = Result<T, PinError>;

/// Structured error type for configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PinError {
    /// An option value is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Config file could not be read
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PinError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PinError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PinError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PinError::InvalidInput { .. } => "INVALID_INPUT",
            PinError::ConfigError { .. } => "CONFIG_ERROR",
            PinError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for PinError {
    fn from(err: serde_json::Error) -> Self {
        PinError::SerializationError {
            reason: err.to_string(),
        }
    }
}
