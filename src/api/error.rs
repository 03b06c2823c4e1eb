//! Server-reported API errors
//!
//! The API answers every 4xx/5xx with `{"error": {"id", "name", "detail"}}`.
//! When that body is missing or malformed an equivalent error is synthesized
//! from the status code so callers can always branch on `id` and `name`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used for errors synthesized from an undecodable error body
pub const UNKNOWN_API_ERROR_NAME: &str = "unknown_api_error";

/// Detail used for errors synthesized from an undecodable error body
pub const UNKNOWN_API_ERROR_DETAIL: &str = "Unknown API error";

/// Error returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub id: String,
    pub name: String,
    pub detail: String,

    /// Raw response body, kept only for synthesized errors
    #[serde(skip)]
    pub raw_body: Option<String>,

    #[serde(skip)]
    synthesized: bool,
}

impl ApiError {
    pub fn new(id: impl Into<String>, name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: detail.into(),
            raw_body: None,
            synthesized: false,
        }
    }

    /// Build the sentinel error for a status whose body could not be decoded
    pub fn unknown(status: u16, body: &[u8]) -> Self {
        let raw_body = if body.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(body).into_owned())
        };

        Self {
            id: status.to_string(),
            name: UNKNOWN_API_ERROR_NAME.to_string(),
            detail: UNKNOWN_API_ERROR_DETAIL.to_string(),
            raw_body,
            synthesized: true,
        }
    }

    /// Whether this error was synthesized locally rather than sent by the server
    pub fn is_unknown(&self) -> bool {
        self.synthesized
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.id, self.name, self.detail)
    }
}

impl std::error::Error for ApiError {}
