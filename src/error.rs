//! Error taxonomy for a single `aws-ssm` invocation.
//!
//! Every variant is terminal: the orchestrator reports it on stderr and the
//! process exits non-zero. Nothing here is retried.

use thiserror::Error;

/// Errors raised while binding a Secrets Manager client.
#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("region must not be empty")]
    EmptyRegion,
}

/// Errors raised by the single `GetSecretValue` call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service reported that the secret does not exist
    #[error("secret '{secret_id}' not found")]
    NotFound { secret_id: String },

    /// Transport or service failure other than "not found"
    #[error("failed to get secret value for '{secret_id}': {message}")]
    Request { secret_id: String, message: String },

    /// The response carried no string payload (binary-only secret, or empty)
    #[error("secret '{secret_id}' does not contain a string value")]
    NoStringValue { secret_id: String },
}

/// Top-level error for one CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Failed to initialize application: {0}")]
    ClientInit(#[from] ClientInitError),

    #[error("Failed to get secret: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to write to stdout: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::Usage(_))
    }

    /// Whether the environment variable reminder should follow the error message.
    pub fn wants_env_reminder(&self) -> bool {
        matches!(self, CliError::Usage(_) | CliError::Configuration(_))
    }
}
