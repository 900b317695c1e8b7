//! Command-line and environment parsing.
//!
//! `-v`/`--version` and `-h`/`--help` are only recognized as the first token,
//! so clap's built-in flags are disabled and the positional surface is all
//! clap sees.

use crate::error::CliError;
use crate::traits::Environment;
use clap::{Command, CommandFactory, Parser};
use std::path::Path;

/// Environment variable consulted when no region argument is given
pub const REGION_ENV: &str = "AWS_REGION";

const DEFAULT_PROGRAM_NAME: &str = "aws-ssm";

const OPTIONS_HELP: &str = "\
Options:
  -v, --version  Show version information
  -h, --help     Show this help message";

const ENV_HELP: &str = "\
Environment variables:
  AWS_REGION             AWS region (can be overridden by second argument)
  AWS_ACCESS_KEY_ID      AWS access key
  AWS_SECRET_ACCESS_KEY  AWS secret key
  AWS_SESSION_TOKEN      Session token (for temporary roles)
  AWS_PROFILE            Named profile from the shared AWS config files
  AWS_SSM_LOG            Log filter for diagnostics on stderr (default: warn)";

#[derive(Parser, Debug)]
#[command(name = "aws-ssm")]
#[command(about = "Fetch a secret from AWS Secrets Manager and print it to stdout", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// AWS Secrets Manager secret ID or ARN
    #[arg(value_name = "secret-id", allow_hyphen_values = true)]
    secret_id: String,

    /// AWS region (optional, overrides AWS_REGION)
    #[arg(value_name = "region")]
    region: Option<String>,
}

/// Validated configuration for one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub secret_id: String,
    pub region: String,
}

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Version,
    Help,
}

/// Parse process arguments (program name included) into an invocation.
///
/// The region comes from the second positional argument when present, and
/// from `AWS_REGION` otherwise. An empty `AWS_REGION` is treated as unset.
pub fn parse(args: &[String], env: &dyn Environment) -> Result<Invocation, CliError> {
    let Some(first) = args.get(1) else {
        return Err(CliError::Usage(format!(
            "missing required argument: usage is {} <secret-id> [region]",
            program_name(args)
        )));
    };

    match first.as_str() {
        "--version" | "-v" => return Ok(Invocation::Version),
        "--help" | "-h" => return Ok(Invocation::Help),
        _ => {}
    }

    let cli = Cli::try_parse_from(args).map_err(|err| CliError::Usage(clap_message(&err)))?;

    if cli.secret_id.is_empty() {
        return Err(CliError::Usage("secret-id must not be empty".to_string()));
    }

    let region = match cli.region {
        Some(region) => region,
        None => env.non_empty_var(REGION_ENV).unwrap_or_default(),
    };

    if region.is_empty() {
        return Err(CliError::Configuration(format!(
            "AWS region must be specified either via {} environment variable or as second argument",
            REGION_ENV
        )));
    }

    Ok(Invocation::Run(Config {
        secret_id: cli.secret_id,
        region,
    }))
}

/// Full help text for `--help`
pub fn help_text(args: &[String]) -> String {
    command(args)
        .after_help(format!("{}\n\n{}", OPTIONS_HELP, ENV_HELP))
        .render_help()
        .to_string()
}

/// Short usage block printed after a usage error
pub fn usage_text(args: &[String]) -> String {
    command(args).render_usage().to_string()
}

/// Reminder of the environment variables the tool reads
pub fn env_reminder() -> &'static str {
    ENV_HELP
}

fn command(args: &[String]) -> Command {
    let prog = program_name(args);
    Cli::command().bin_name(prog.clone()).override_usage(format!(
        "{prog} <secret-id> [region]\n       {prog} --version\n       {prog} --help"
    ))
}

fn program_name(args: &[String]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_PROGRAM_NAME)
        .to_string()
}

/// First line of a clap error, without its "error: " prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}
