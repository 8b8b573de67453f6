//! Default values for configuration options.

use crate::webhook::UrlTemplate;

/// Default configuration file written by `init`.
pub const CONFIG_FILE: &str = "ifttt-webhook.toml";

/// Default trigger URL template.
#[must_use]
pub fn url_template() -> UrlTemplate {
    UrlTemplate::default()
}
