mod app;
mod cli;
mod context;
mod error;
mod format;
mod output;
mod secrets;
mod traits;
mod version;

use anyhow::{Context as AnyhowContext, Result};
use context::Context;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "AWS_SSM_LOG";

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the secret
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            output::error(&format!("{:#}", err));
            ExitCode::from(app::EXIT_FAILURE)
        }
    }
}

fn run() -> Result<u8> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let ctx = Context::new();

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    Ok(runtime.block_on(app::run(&ctx, &args)))
}
