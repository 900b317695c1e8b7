//! AWS Secrets Manager client.
//!
//! Credentials come from the standard AWS provider chain (environment,
//! shared config files, SSO, container and instance roles). The region is
//! always set explicitly from the parsed configuration.

use super::client::{ClientFactory, SecretsClient};
use crate::error::{ClientInitError, FetchError};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueOutput;
use std::sync::Arc;

/// Secrets Manager client bound to one region.
///
/// The underlying SDK client is cheap to clone and safe for concurrent use.
#[derive(Debug, Clone)]
pub struct AwsSecretsClient {
    client: Client,
}

impl AwsSecretsClient {
    /// Wrap an already configured SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Load the default AWS configuration for `region` and build a client.
    pub async fn connect(region: &str) -> Result<Self, ClientInitError> {
        if region.is_empty() {
            return Err(ClientInitError::EmptyRegion);
        }

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        tracing::debug!(region, "AWS configuration loaded");
        Ok(Self::new(Client::new(&config)))
    }
}

#[async_trait]
impl SecretsClient for AwsSecretsClient {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, FetchError> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| {
                let not_found = err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception());
                if not_found {
                    FetchError::NotFound {
                        secret_id: secret_id.to_string(),
                    }
                } else {
                    FetchError::Request {
                        secret_id: secret_id.to_string(),
                        message: DisplayErrorContext(&err).to_string(),
                    }
                }
            })?;

        secret_string(secret_id, &output)
    }
}

/// Extract the string payload from a `GetSecretValue` response.
///
/// An empty string is a valid payload; only an absent one is an error.
fn secret_string(secret_id: &str, output: &GetSecretValueOutput) -> Result<String, FetchError> {
    match output.secret_string() {
        Some(value) => Ok(value.to_string()),
        None => {
            if output.secret_binary().is_some() {
                tracing::debug!(secret_id, "secret only has a binary payload");
            }
            Err(FetchError::NoStringValue {
                secret_id: secret_id.to_string(),
            })
        }
    }
}

/// Factory producing [`AwsSecretsClient`]s from the default credential chain
pub struct AwsClientFactory;

#[async_trait]
impl ClientFactory for AwsClientFactory {
    async fn connect(&self, region: &str) -> Result<Arc<dyn SecretsClient>, ClientInitError> {
        let client = AwsSecretsClient::connect(region).await?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::primitives::Blob;

    #[test]
    fn test_secret_string_plain() {
        let output = GetSecretValueOutput::builder()
            .secret_string("my-secret-value")
            .build();
        assert_eq!(
            secret_string("my-secret", &output).unwrap(),
            "my-secret-value"
        );
    }

    #[test]
    fn test_secret_string_json_untouched() {
        let json = r#"{"username": "admin", "password": "secret123"}"#;
        let output = GetSecretValueOutput::builder().secret_string(json).build();
        assert_eq!(secret_string("json-secret", &output).unwrap(), json);
    }

    #[test]
    fn test_secret_string_empty_is_valid() {
        let output = GetSecretValueOutput::builder().secret_string("").build();
        assert_eq!(secret_string("empty-secret", &output).unwrap(), "");
    }

    #[test]
    fn test_secret_string_missing() {
        let output = GetSecretValueOutput::builder().build();
        let err = secret_string("nothing", &output).unwrap_err();
        assert!(matches!(err, FetchError::NoStringValue { ref secret_id } if secret_id == "nothing"));
    }

    #[test]
    fn test_secret_string_binary_only() {
        let output = GetSecretValueOutput::builder()
            .secret_binary(Blob::new(vec![0xde, 0xad, 0xbe, 0xef]))
            .build();
        let err = secret_string("binary-secret", &output).unwrap_err();
        assert!(matches!(err, FetchError::NoStringValue { .. }));
    }

    #[tokio::test]
    async fn test_connect_rejects_empty_region() {
        let err = AwsSecretsClient::connect("").await.unwrap_err();
        assert!(matches!(err, ClientInitError::EmptyRegion));
    }

    #[tokio::test]
    async fn test_connect_defers_credentials_to_first_call() {
        // Credential resolution is lazy, so binding a region never fails on credentials
        assert!(AwsSecretsClient::connect("us-east-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_factory_rejects_empty_region() {
        let result = AwsClientFactory.connect("").await;
        assert!(matches!(result, Err(ClientInitError::EmptyRegion)));
    }
}
