//! Secret retrieval from AWS Secrets Manager.
//!
//! [`SecretsClient`] is the seam between the orchestrator and the backing
//! store: production code uses [`AwsClientFactory`], tests use the mocks.

mod aws;
pub mod client;
#[cfg(test)]
pub mod mock;

pub use aws::AwsClientFactory;
pub use client::{ClientFactory, SecretsClient};
#[cfg(test)]
pub use mock::{MockClientFactory, MockResponse, MockSecretsClient};
