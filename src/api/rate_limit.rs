//! Rate limit header parsing
//!
//! Successful responses carry `X-Rate-Limit: <limit>/<reset_seconds>`.

use crate::error::{Error, Result};
use std::str::FromStr;
use std::time::Duration;

/// Name of the response header carrying rate limit information
pub const RATE_LIMIT_HEADER: &str = "X-Rate-Limit";

/// Rate limit snapshot reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RateLimit {
    /// Maximum number of requests in the current window
    pub limit: u64,
    /// Seconds until the window resets
    pub reset_seconds: u64,
}

impl RateLimit {
    pub fn new(limit: u64, reset_seconds: u64) -> Self {
        Self {
            limit,
            reset_seconds,
        }
    }

    /// Parse a header value of the form `<limit>/<reset_seconds>`
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::rate_limit_parse(value, "header is missing or empty"));
        }

        let (limit, reset) = value
            .split_once('/')
            .ok_or_else(|| Error::rate_limit_parse(value, "missing '/' separator"))?;

        let limit = limit
            .parse::<u64>()
            .map_err(|e| Error::rate_limit_parse(value, format!("invalid limit: {e}")))?;
        let reset_seconds = reset
            .parse::<u64>()
            .map_err(|e| Error::rate_limit_parse(value, format!("invalid reset: {e}")))?;

        Ok(Self::new(limit, reset_seconds))
    }

    /// Time until the window resets
    pub fn reset_after(&self) -> Duration {
        Duration::from_secs(self.reset_seconds)
    }
}

impl FromStr for RateLimit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.limit, self.reset_seconds)
    }
}
