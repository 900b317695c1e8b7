//! One invocation from arguments to stdout.
//!
//! Parse, bind a client to the region, fetch once, format, print. Any error
//! ends the run: it is reported on stderr and nothing reaches stdout.

use crate::cli::{self, Config, Invocation};
use crate::context::Context;
use crate::error::{CliError, FetchError};
use crate::format::format_output;
use crate::secrets::SecretsClient;
use crate::version::BUILD_INFO;
use std::sync::Arc;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// A configured client ready to fetch the requested secret
pub struct App {
    client: Arc<dyn SecretsClient>,
    config: Config,
}

impl App {
    pub fn new(client: Arc<dyn SecretsClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// Bind a client to the configured region through the context's factory
    pub async fn connect(ctx: &Context, config: Config) -> Result<Self, CliError> {
        let client = ctx.clients.connect(&config.region).await?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the configured secret. No retries.
    pub async fn get_secret(&self) -> Result<String, FetchError> {
        self.client.fetch_secret(&self.config.secret_id).await
    }
}

/// Run the tool for `args` and return the process exit status
pub async fn run(ctx: &Context, args: &[String]) -> u8 {
    match execute(ctx, args).await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report(ctx, args, &err);
            EXIT_FAILURE
        }
    }
}

async fn execute(ctx: &Context, args: &[String]) -> Result<(), CliError> {
    let config = match cli::parse(args, &*ctx.env)? {
        Invocation::Version => {
            for line in BUILD_INFO.lines() {
                ctx.output.info(&line)?;
            }
            return Ok(());
        }
        Invocation::Help => {
            ctx.output.info(&cli::help_text(args))?;
            return Ok(());
        }
        Invocation::Run(config) => config,
    };
    tracing::debug!(secret_id = %config.secret_id, region = %config.region, "arguments parsed");

    let app = App::connect(ctx, config).await?;
    tracing::debug!(region = %app.config().region, "client ready");

    let value = app.get_secret().await?;
    tracing::debug!(secret_id = %app.config().secret_id, "secret fetched");

    ctx.output.secret(&format_output(&value))?;
    Ok(())
}

fn report(ctx: &Context, args: &[String], err: &CliError) {
    // The stderr message is the user-facing report; this only adds the error's debug form
    tracing::debug!(error = ?err, "invocation failed");

    ctx.output.error(&err.to_string());
    if err.wants_usage() {
        ctx.output.usage(&cli::usage_text(args));
    }
    if err.wants_env_reminder() {
        ctx.output.usage(cli::env_reminder());
    }
}
