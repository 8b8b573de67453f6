//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::webhook::{Credential, Ingredients, UrlTemplate};

use super::cli::{Cli, Command};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Trigger an arbitrary event.
    Trigger {
        /// Event name
        event: String,
        /// Values sent with the event
        ingredients: Ingredients,
    },

    /// Send an email through the `send_gmail` applet.
    Gmail {
        /// Recipient address
        to: String,
        /// Email subject
        subject: Option<String>,
        /// Email body
        body: Option<String>,
    },

    /// Send a mobile notification through the `notification` applet.
    Notify {
        /// Notification title
        title: Option<String>,
        /// Notification text
        message: Option<String>,
        /// Link opened from the notification
        url: Option<String>,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trigger { event, ingredients } => {
                write!(f, "trigger {event} ({} values)", ingredients.len())
            }
            Self::Gmail { .. } => f.write_str("gmail"),
            Self::Notify { .. } => f.write_str("notify"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook key or key file path, resolved when the client is built
    pub key: String,

    /// Trigger URL template
    pub url_template: UrlTemplate,

    /// What to send
    pub action: Action,

    /// Verbose logging enabled
    pub verbose: bool,
}

// Omits the key.
impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url_template: {}, action: {} }}",
            self.url_template, self.action,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key is missing
    /// - The URL template lacks a placeholder or does not render a URL
    /// - The command is `init` or the event name is empty
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let key = Self::resolve_key(cli, toml)?;
        let url_template = Self::resolve_url_template(cli, toml)?;
        let action = Self::resolve_action(&cli.command)?;

        Ok(Self {
            key,
            url_template,
            action,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.key.as_deref()))
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(field::KEY, "Use --key or set webhook.key in config file")
            })
    }

    fn resolve_url_template(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<UrlTemplate, ConfigError> {
        let Some(raw) = cli
            .url_template
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url_template.as_deref()))
        else {
            return Ok(defaults::url_template());
        };

        let template = UrlTemplate::new(raw);
        Self::validate_template(&template)?;
        Ok(template)
    }

    fn validate_template(template: &UrlTemplate) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidTemplate {
            template: template.to_string(),
            reason,
        };

        if !template.has_placeholders() {
            return Err(invalid(
                "must contain both {event_name} and {key}".to_string(),
            ));
        }

        // Render with sample values to catch templates that can never form a URL
        template
            .render("event", &Credential::new("key"))
            .map_err(|e| invalid(e.source.to_string()))?;
        Ok(())
    }

    fn resolve_action(command: &Command) -> Result<Action, ConfigError> {
        match command {
            Command::Trigger {
                event,
                value1,
                value2,
                value3,
            } => {
                if event.is_empty() {
                    return Err(ConfigError::EmptyEventName);
                }
                Ok(Action::Trigger {
                    event: event.clone(),
                    ingredients: Ingredients::from_options(
                        value1.clone(),
                        value2.clone(),
                        value3.clone(),
                    ),
                })
            }
            Command::Gmail { to, subject, body } => Ok(Action::Gmail {
                to: to.clone(),
                subject: subject.clone(),
                body: body.clone(),
            }),
            Command::Notify {
                title,
                message,
                url,
            } => Ok(Action::Notify {
                title: title.clone(),
                message: message.clone(),
                url: url.clone(),
            }),
            Command::Init { .. } => Err(ConfigError::missing(
                field::COMMAND,
                "Use trigger, gmail or notify to send an event",
            )),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
