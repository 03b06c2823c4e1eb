//! HTTP client module
//!
//! Provides the transport core every resource service goes through.
//!
//! # Features
//!
//! - **Bearer Authentication**: the access token is attached to every request
//! - **Typed Errors**: 4xx/5xx bodies become [`ApiError`](crate::api::ApiError)s
//! - **Rate Limit Tracking**: the last `X-Rate-Limit` header is kept per client
//! - **Pluggable Transport**: swap `reqwest` for a custom [`HttpTransport`]

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, API_ENDPOINT};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
