//! Configuration layer for ifttt-webhook.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Action`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--key`, `--url-template`
//! 2. **TOML config file** - the `[webhook]` section
//! 3. **Built-in defaults** - the public Maker Webhooks URL template
//!
//! The key has no default and must come from the CLI or the config file.
//! The key is kept as given; whether it names a key file is decided when
//! the webhook client is built.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Action, ValidatedConfig, write_default_config};
