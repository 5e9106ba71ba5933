//! Index client error types.
//!
//! This module defines the error type returned by every client operation.

use thiserror::Error;

/// Errors that can occur during index client operations.
#[derive(Debug, Clone, Error)]
pub enum IndexClientError {
    /// Validation error (e.g., invalid index-creation settings).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Transport-level failure (connection refused, DNS failure, bad URL).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The response body was not valid JSON.
    #[error("Response parse error: {0}")]
    ResponseParseError(String),
}

impl IndexClientError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a response parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ResponseParseError(msg.into())
    }
}
