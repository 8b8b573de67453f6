//! Trigger URL templates.

use std::fmt;

use super::TemplateError;
use super::key::Credential;

/// Placeholder replaced by the event name.
pub const EVENT_NAME_PLACEHOLDER: &str = "{event_name}";

/// Placeholder replaced by the webhook key.
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Public Maker Webhooks trigger endpoint.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://maker.ifttt.com/trigger/{event_name}/with/key/{key}";

/// A trigger URL with `{event_name}` and `{key}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Wraps a template string.
    ///
    /// The template is not checked here; a template that cannot produce a
    /// URL fails on [`render`](Self::render).
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both placeholders appear in the template.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.0.contains(EVENT_NAME_PLACEHOLDER) && self.0.contains(KEY_PLACEHOLDER)
    }

    /// Substitutes every placeholder occurrence and parses the result.
    ///
    /// The template is scanned once, so placeholder text inside `event_name`
    /// is kept literally and never replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the substituted string is not a valid
    /// absolute URL. The key is redacted in the error.
    pub fn render(&self, event_name: &str, key: &Credential) -> Result<url::Url, TemplateError> {
        let rendered = self.substitute(event_name, key.expose());

        url::Url::parse(&rendered).map_err(|source| TemplateError {
            url: self.substitute(event_name, "***"),
            source,
        })
    }

    fn substitute(&self, event_name: &str, key: &str) -> String {
        let mut out = String::with_capacity(self.0.len() + event_name.len() + key.len());
        let mut rest = self.0.as_str();

        while let Some(start) = rest.find('{') {
            let (literal, tail) = rest.split_at(start);
            out.push_str(literal);

            if let Some(after) = tail.strip_prefix(EVENT_NAME_PLACEHOLDER) {
                out.push_str(event_name);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(KEY_PLACEHOLDER) {
                out.push_str(key);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_URL_TEMPLATE)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
