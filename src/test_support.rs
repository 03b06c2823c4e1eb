//! Shared helpers for unit tests

use crate::api::{ClientReader, ClientWriter, RATE_LIMIT_HEADER};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::types::Method;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wiremock::{MockServer, ResponseTemplate};

pub(crate) const TEST_TOKEN: &str = "test-token";

/// Client pointed at a mock server
pub(crate) fn mock_client(server: &MockServer) -> Client {
    Client::builder(TEST_TOKEN)
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// 200 response with a valid rate limit header and a JSON body
pub(crate) fn ok_json(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header(RATE_LIMIT_HEADER, "36/200")
        .set_body_json(body)
}

/// A request seen by [`RecordingClient`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Capability double that records calls and answers with a canned body
#[derive(Debug)]
pub(crate) struct RecordingClient {
    response: Value,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingClient {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn record<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let body = body
            .map(|b| serde_json::from_slice(&b))
            .transpose()
            .map_err(Error::Decode)?;
        self.calls.lock().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        serde_json::from_value(self.response.clone()).map_err(Error::Decode)
    }
}

#[async_trait]
impl ClientReader for RecordingClient {
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.record(Method::GET, path, None)
    }
}

#[async_trait]
impl ClientWriter for RecordingClient {
    async fn post<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.record(Method::POST, path, Some(body))
    }

    async fn put<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.record(Method::PUT, path, Some(body))
    }

    async fn patch<T>(&self, path: &str, body: Vec<u8>) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.record(Method::PATCH, path, Some(body))
    }
}
