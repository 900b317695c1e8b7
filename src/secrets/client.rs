//! Capability traits for fetching secrets.
//!
//! The orchestrator only ever sees these traits, so a live AWS client and
//! an in-memory double are interchangeable.

use crate::error::{ClientInitError, FetchError};
use async_trait::async_trait;
use std::sync::Arc;

/// A client able to fetch one secret's string value.
///
/// Implementations must be safe to share between tasks. A fetch is bounded
/// only by the caller: dropping the future cancels it, and callers wanting a
/// deadline wrap it in `tokio::time::timeout`.
#[async_trait]
pub trait SecretsClient: Send + Sync {
    /// Fetch the string payload of `secret_id` with exactly one remote call.
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, FetchError>;
}

/// Builds a [`SecretsClient`] bound to a region.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn connect(&self, region: &str) -> Result<Arc<dyn SecretsClient>, ClientInitError>;
}
