//! In-memory secrets client for tests.

use super::client::{ClientFactory, SecretsClient};
use crate::error::{ClientInitError, FetchError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Pre-configured response for one secret id
#[derive(Debug, Clone)]
pub enum MockResponse {
    Value(String),
    NoStringValue,
    Error(String),
}

/// Mock secrets client that answers from a fixed table and records calls
pub struct MockSecretsClient {
    responses: Mutex<HashMap<String, MockResponse>>,
    calls: Mutex<Vec<String>>,
}

impl MockSecretsClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer `secret_id` with `value`
    pub fn with_secret(self, secret_id: &str, value: &str) -> Self {
        self.respond(secret_id, MockResponse::Value(value.to_string()));
        self
    }

    pub fn respond(&self, secret_id: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(secret_id.to_string(), response);
    }

    /// Secret ids fetched so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSecretsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretsClient for MockSecretsClient {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(secret_id.to_string());

        let response = self.responses.lock().unwrap().get(secret_id).cloned();
        match response {
            Some(MockResponse::Value(value)) => Ok(value),
            Some(MockResponse::NoStringValue) => Err(FetchError::NoStringValue {
                secret_id: secret_id.to_string(),
            }),
            Some(MockResponse::Error(message)) => Err(FetchError::Request {
                secret_id: secret_id.to_string(),
                message,
            }),
            None => Err(FetchError::NotFound {
                secret_id: secret_id.to_string(),
            }),
        }
    }
}

/// Mock factory handing out a shared [`MockSecretsClient`]
pub struct MockClientFactory {
    client: Arc<MockSecretsClient>,
    fail_with: Option<fn() -> ClientInitError>,
    regions: Mutex<Vec<String>>,
}

impl MockClientFactory {
    pub fn new(client: Arc<MockSecretsClient>) -> Self {
        Self {
            client,
            fail_with: None,
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Factory whose every `connect` fails with the given error
    pub fn failing(make_error: fn() -> ClientInitError) -> Self {
        Self {
            client: Arc::new(MockSecretsClient::new()),
            fail_with: Some(make_error),
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Regions passed to `connect`, in call order
    pub fn regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClientFactory for MockClientFactory {
    async fn connect(&self, region: &str) -> Result<Arc<dyn SecretsClient>, ClientInitError> {
        self.regions.lock().unwrap().push(region.to_string());
        if let Some(make_error) = self.fail_with {
            return Err(make_error());
        }
        Ok(self.client.clone())
    }
}
