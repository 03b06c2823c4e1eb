//! Client facade
//!
//! Builds the transport core once and wires every resource service to it.

use crate::api::RateLimit;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, HttpTransport, ReqwestTransport};
use crate::{account, budget, category, month, payee, transaction, user};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Entry point of the API
///
/// Cloning is cheap: clones share the transport and the rate limit snapshot.
#[derive(Clone)]
pub struct Client {
    http: Arc<HttpClient>,

    user: user::Service<HttpClient>,
    budget: budget::Service<HttpClient>,
    account: account::Service<HttpClient>,
    category: category::Service<HttpClient>,
    payee: payee::Service<HttpClient>,
    month: month::Service<HttpClient>,
    transaction: transaction::Service<HttpClient>,
}

impl Client {
    /// Create a client with the default transport
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder(access_token).build()
    }

    /// Create a client builder
    pub fn builder(access_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(access_token)
    }

    fn from_http(http: Arc<HttpClient>) -> Self {
        Self {
            user: user::Service::new(Arc::clone(&http)),
            budget: budget::Service::new(Arc::clone(&http)),
            account: account::Service::new(Arc::clone(&http)),
            category: category::Service::new(Arc::clone(&http)),
            payee: payee::Service::new(Arc::clone(&http)),
            month: month::Service::new(Arc::clone(&http)),
            transaction: transaction::Service::new(Arc::clone(&http)),
            http,
        }
    }

    pub fn user(&self) -> &user::Service<HttpClient> {
        &self.user
    }

    pub fn budget(&self) -> &budget::Service<HttpClient> {
        &self.budget
    }

    pub fn account(&self) -> &account::Service<HttpClient> {
        &self.account
    }

    pub fn category(&self) -> &category::Service<HttpClient> {
        &self.category
    }

    pub fn payee(&self) -> &payee::Service<HttpClient> {
        &self.payee
    }

    pub fn month(&self) -> &month::Service<HttpClient> {
        &self.month
    }

    pub fn transaction(&self) -> &transaction::Service<HttpClient> {
        &self.transaction
    }

    /// Rate limit reported by the last successful response, if any
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.http.rate_limit()
    }

    /// Get the underlying HTTP client
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    access_token: String,
    config: HttpClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            config: HttpClientConfig::default(),
            transport: None,
        }
    }

    /// Send requests through a preconfigured reqwest client
    /// (custom TLS roots, proxies, connection limits)
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(ReqwestTransport::with_client(client)));
        self
    }

    /// Send requests through a custom transport
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<Client> {
        if self.access_token.trim().is_empty() {
            return Err(Error::config("access token is empty"));
        }
        Url::parse(&self.config.base_url)?;

        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()));
        debug!("Creating client for {}", self.config.base_url);

        let http = HttpClient::with_transport(self.access_token, self.config, transport);
        Ok(Client::from_http(Arc::new(http)))
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
