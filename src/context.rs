use crate::secrets::{AwsClientFactory, ClientFactory};
use crate::traits::{Environment, Output, ProcessEnvironment, TerminalOutput};
#[cfg(test)]
use crate::secrets::{MockClientFactory, MockSecretsClient};
#[cfg(test)]
use crate::traits::{MockEnvironment, MockOutput};
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub env: Arc<dyn Environment>,
    pub output: Arc<dyn Output>,
    pub clients: Arc<dyn ClientFactory>,
}

impl Context {
    /// Create a new context with real implementations (for production use)
    pub fn new() -> Self {
        Self {
            env: Arc::new(ProcessEnvironment),
            output: Arc::new(TerminalOutput),
            clients: Arc::new(AwsClientFactory),
        }
    }

    /// Create a new context with mock implementations (for testing)
    #[cfg(test)]
    #[allow(dead_code)]
    pub fn test() -> Self {
        Self {
            env: Arc::new(MockEnvironment::new()),
            output: Arc::new(MockOutput::new()),
            clients: Arc::new(MockClientFactory::new(Arc::new(MockSecretsClient::new()))),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(
        env: Arc<dyn Environment>,
        output: Arc<dyn Output>,
        clients: Arc<dyn ClientFactory>,
    ) -> Self {
        Self {
            env,
            output,
            clients,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        Self {
            env: Arc::clone(&self.env),
            output: Arc::clone(&self.output),
            clients: Arc::clone(&self.clients),
        }
    }
}
