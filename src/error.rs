//! Error types for connector provisioning.
//!
//! All fallible operations in this crate return [`ConnectorError`]. Remote
//! failures surfaced by the [`ConnectorHelper`](crate::traits::ConnectorHelper)
//! collaborator are carried through unchanged; this layer performs no retries.

use thiserror::Error;

/// Errors that can occur while building or provisioning a connector.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Configuration error (malformed trusted-endpoint pattern, bad options)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Caller-supplied input was rejected (e.g. empty role prefix)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The interactive input collector failed to produce a value
    #[error("Input collection error: {0}")]
    InputError(String),

    /// Error reported by the remote service through the helper
    #[error("Remote service error {code}: {message}")]
    RemoteError {
        /// Status code reported by the remote service
        code: u16,
        /// Error message
        message: String,
        /// Optional raw error payload
        details: Option<serde_json::Value>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Operation not supported by the collaborator
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl ConnectorError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a remote service error without a payload
    pub fn remote<S: Into<String>>(code: u16, message: S) -> Self {
        Self::RemoteError {
            code,
            message: message.into(),
            details: None,
        }
    }
}

/// Result type for connector provisioning operations.
pub type Result<T> = std::result::Result<T, ConnectorError>;
