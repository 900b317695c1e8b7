//! Rendering of a fetched secret for stdout.

/// Format a secret value for display.
///
/// JSON secrets are printed exactly as stored, the same way the AWS CLI
/// prints `SecretString`, so this is an identity transform. The JSON parse
/// only classifies the value for diagnostics and never changes the output.
pub fn format_output(secret_value: &str) -> String {
    // TODO: drop the classification parse unless a pretty-print option is added
    let is_json = serde_json::from_str::<serde_json::Value>(secret_value).is_ok();
    tracing::debug!(is_json, len = secret_value.len(), "formatting secret value");
    secret_value.to_string()
}
