//! Common types used throughout the client
//!
//! Shared wire-level shapes that every resource service relies on.

use serde::Deserialize;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
}

impl Method {
    /// Whether requests with this method carry a JSON body
    pub fn has_body(self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::PATCH)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Success envelope: every response body is `{"data": {...}}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_has_body() {
        assert!(!Method::GET.has_body());
        assert!(Method::POST.has_body());
        assert!(Method::PUT.has_body());
        assert!(Method::PATCH.has_body());
    }

    #[test]
    fn test_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(Method::PATCH), reqwest::Method::PATCH);
        assert_eq!(Method::PUT.to_string(), "PUT");
    }

    #[test]
    fn test_envelope_decode() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data":{"user":{"id":"u1"}}}"#).unwrap();
        assert_eq!(envelope.data["user"]["id"], "u1");
    }
}
