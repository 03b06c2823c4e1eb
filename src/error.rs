//! Error types for the budget API client
//!
//! Every public call returns `Result<T, Error>` where Error is defined here.
//! Server-declared failures carry a typed [`ApiError`]; everything else is a
//! transport, header, or (de)serialization problem surfaced as-is.

use crate::api::ApiError;
use thiserror::Error;

/// The main error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid rate limit header '{value}': {message}")]
    RateLimitParse { value: String, message: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error for non-reqwest transports
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a rate limit parse error
    pub fn rate_limit_parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimitParse {
            value: value.into(),
            message: message.into(),
        }
    }

    /// The server-reported error, if this is one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if the failure happened before a response was obtained
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Transport { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;
