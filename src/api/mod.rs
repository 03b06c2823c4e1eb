//! Shared structures and behaviours of the API services
//!
//! Every resource service talks to the transport through the narrow
//! capability traits defined here, so any implementor (the real
//! [`HttpClient`](crate::http::HttpClient) or a test double) can back them.
//!
//! # Overview
//!
//! - [`ApiError`] - server-reported error body
//! - [`RateLimit`] - last observed `X-Rate-Limit` header
//! - [`Date`] / [`MonthRef`] - calendar dates and the `current` month token
//! - [`Filter`] / [`ToQuery`] - incremental-sync query encoding

mod date;
mod error;
mod filter;
mod rate_limit;

pub use date::{Date, MonthRef, CURRENT_MONTH, DATE_FORMAT};
pub use error::{ApiError, UNKNOWN_API_ERROR_DETAIL, UNKNOWN_API_ERROR_NAME};
pub use filter::{Filter, ToQuery};
pub use rate_limit::{RateLimit, RATE_LIMIT_HEADER};

pub(crate) use filter::{encode_query, with_query};

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read-only access to the API
#[async_trait]
pub trait ClientReader: Send + Sync {
    /// Send a GET request and decode the response body into `T`
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;
}

/// Write access to the API
///
/// `body` is an already-serialized JSON document.
#[async_trait]
pub trait ClientWriter: Send + Sync {
    async fn post<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;

    async fn put<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;

    async fn patch<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static;
}

/// Read-write access to the API
pub trait ClientReaderWriter: ClientReader + ClientWriter {}

impl<C: ClientReader + ClientWriter + ?Sized> ClientReaderWriter for C {}

/// Serialize a request payload to JSON bytes
pub(crate) fn to_body<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(Error::Encode)
}
