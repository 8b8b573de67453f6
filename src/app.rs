//! Process-level helpers for the CLI: exit codes, config error hints and
//! log output.

use ifttt_webhook::config::{ConfigError, defaults, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Process exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// The action completed, or `init` wrote its template.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, missing key, unreadable config or unusable URL template.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// The key was rejected, the event failed, or the service was unreachable.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

const INIT_HINT: &str = "Run 'ifttt-webhook init' to generate a configuration template.";

/// Returns a follow-up suggestion for a configuration error, if one helps.
pub fn config_hint(error: &ConfigError) -> Option<String> {
    match error {
        ConfigError::MissingRequired {
            field: field::KEY, ..
        }
        | ConfigError::FileRead { .. } => Some(INIT_HINT.to_string()),
        ConfigError::InvalidTemplate { .. } => Some(format!(
            "The default template is '{}'.",
            defaults::url_template()
        )),
        _ => None,
    }
}

/// Writes the hint for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` overrides the level picked from `verbose`.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
