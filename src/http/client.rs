//! Transport core for the budget API
//!
//! Issues every request the resource services make:
//! - Builds the absolute URL and the auth/content headers
//! - Maps 4xx/5xx responses to typed [`ApiError`]s
//! - Records the `X-Rate-Limit` header of successful responses
//! - Decodes the response body into the caller's model

use super::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::api::{ApiError, ClientReader, ClientWriter, RateLimit, RATE_LIMIT_HEADER};
use crate::error::{Error, Result};
use crate::types::Method;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Root of the public API
pub const API_ENDPOINT: &str = "https://api.youneedabudget.com/v1";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL all request paths are appended to
    pub base_url: String,
    /// Per-request timeout, none by default
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_ENDPOINT.to_string(),
            timeout: None,
            user_agent: format!("budget-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// HTTP client holding the access token and the last observed rate limit
pub struct HttpClient {
    access_token: String,
    config: HttpClientConfig,
    transport: Arc<dyn HttpTransport>,
    rate_limit: Mutex<Option<RateLimit>>,
}

impl HttpClient {
    /// Create a client with default configuration and transport
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_transport(
            access_token,
            HttpClientConfig::default(),
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// Create a client with custom configuration and transport
    pub fn with_transport(
        access_token: impl Into<String>,
        config: HttpClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            config,
            transport,
            rate_limit: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Rate limit reported by the last successful response
    pub fn rate_limit(&self) -> Option<RateLimit> {
        *self.rate_limit.lock()
    }

    /// Send a request and decode the `data` envelope into `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let url = self.build_url(path)?;
        let headers = self.build_headers(method)?;
        debug!("Request: {} {}", method, url);

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        let response = self.send(request).await?;
        debug!("Response: {} {}", response.status, path);

        if response.status >= 400 {
            let err = decode_error(&response);
            warn!(
                "API error {} on {} {}: {} ({})",
                response.status, method, path, err.name, err.id
            );
            return Err(Error::Api(err));
        }

        let rate_limit = match RateLimit::parse(response.header_str(RATE_LIMIT_HEADER)) {
            Ok(rl) => rl,
            Err(e) => {
                warn!("Discarding response for {} {}: {}", method, path, e);
                return Err(e);
            }
        };
        *self.rate_limit.lock() = Some(rate_limit);

        serde_json::from_slice(&response.body).map_err(Error::Decode)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.transport.send(request))
                .await
                .map_err(|_| Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                })?,
            None => self.transport.send(request).await,
        }
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn build_headers(&self, method: Method) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|_| Error::config("access token contains invalid header characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        if method.has_body() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if let Ok(agent) = HeaderValue::from_str(&self.config.user_agent) {
            headers.insert(USER_AGENT, agent);
        }

        Ok(headers)
    }
}

/// Decode an error body, falling back to the sentinel error
fn decode_error(response: &HttpResponse) -> ApiError {
    serde_json::from_slice::<ErrorEnvelope>(&response.body)
        .map(|envelope| envelope.error)
        .unwrap_or_else(|_| ApiError::unknown(response.status, &response.body))
}

#[async_trait]
impl ClientReader for HttpClient {
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(Method::GET, path, None).await
    }
}

#[async_trait]
impl ClientWriter for HttpClient {
    async fn post<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn put<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    async fn patch<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.execute(Method::PATCH, path, Some(body)).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .field("rate_limit", &self.rate_limit())
            .finish_non_exhaustive()
    }
}
