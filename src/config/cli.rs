//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trigger IFTTT Maker Webhooks events from the command line.
///
/// The key is checked against the service before any event is sent.
#[derive(Debug, Parser)]
#[command(name = "ifttt-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Action to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook key, or path to a file whose first line is the key
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Trigger URL template with {event_name} and {key} placeholders
    #[arg(long = "url-template", global = true)]
    pub url_template: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for ifttt-webhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Trigger an event with up to three values
    Trigger {
        /// Event name configured in the applet
        event: String,

        /// First ingredient
        #[arg(long)]
        value1: Option<String>,

        /// Second ingredient
        #[arg(long)]
        value2: Option<String>,

        /// Third ingredient
        #[arg(long)]
        value3: Option<String>,
    },

    /// Send an email through the `send_gmail` applet
    Gmail {
        /// Recipient address
        #[arg(long)]
        to: String,

        /// Email subject
        #[arg(long)]
        subject: Option<String>,

        /// Email body
        #[arg(long)]
        body: Option<String>,
    },

    /// Send a mobile notification through the `notification` applet
    Notify {
        /// Notification title
        #[arg(long)]
        title: Option<String>,

        /// Notification text
        #[arg(long)]
        message: Option<String>,

        /// Link opened from the notification
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error on failure.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or missing arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
