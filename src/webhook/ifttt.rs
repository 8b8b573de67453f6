//! The Maker Webhooks client.

use super::key::{Credential, resolve_key};
use super::payload::{Ingredient, Ingredients};
use super::template::UrlTemplate;
use super::{HttpClient, HttpRequest, IftttError};

#[cfg(test)]
#[path = "ifttt_tests.rs"]
mod tests;

/// Event triggered at construction to check that the key is accepted.
pub const KEY_TEST_EVENT: &str = "key_test_event";

/// Event name expected by the Gmail "send an email" applet.
pub const GMAIL_EVENT: &str = "send_gmail";

/// Event name expected by the mobile notification applet.
pub const NOTIFICATION_EVENT: &str = "notification";

/// Client for triggering IFTTT Maker Webhooks events.
///
/// The key and URL template are fixed at construction and shared by every
/// trigger. Construction itself sends one [`KEY_TEST_EVENT`] trigger, so an
/// existing `IftttWebhook` always holds a key the service has accepted once.
///
/// The client holds no mutable state; it can be shared across tasks whenever
/// its transport `H` can.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
#[derive(Debug)]
pub struct IftttWebhook<H> {
    client: H,
    key: Credential,
    template: UrlTemplate,
}

impl<H: HttpClient> IftttWebhook<H> {
    /// Connects to the public Maker Webhooks endpoint.
    ///
    /// `key` is either the key itself or a path to a file whose first line
    /// holds it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be resolved or the validation
    /// trigger fails.
    pub async fn new(client: H, key: &str) -> Result<Self, IftttError> {
        Self::with_template(client, key, UrlTemplate::default()).await
    }

    /// Connects using a custom URL template.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be resolved, the template does not
    /// render a valid URL, or the validation trigger fails.
    pub async fn with_template(
        client: H,
        key: &str,
        template: UrlTemplate,
    ) -> Result<Self, IftttError> {
        let key = resolve_key(key)?;
        let webhook = Self {
            client,
            key,
            template,
        };

        tracing::debug!("Validating webhook key");
        webhook.trigger(KEY_TEST_EVENT, Ingredients::new()).await?;
        tracing::info!("Webhook key accepted");

        Ok(webhook)
    }

    /// Returns the URL template in use.
    #[must_use]
    pub const fn template(&self) -> &UrlTemplate {
        &self.template
    }

    /// Triggers `event_name` with the given ingredients.
    ///
    /// Sends a single POST and succeeds only on `200 OK`.
    ///
    /// # Errors
    ///
    /// - [`IftttError::EmptyEventName`] if `event_name` is empty
    /// - [`IftttError::RequestFailed`] for any status other than 200
    /// - [`IftttError::Transport`] if no response was received
    pub async fn trigger(
        &self,
        event_name: &str,
        ingredients: Ingredients,
    ) -> Result<(), IftttError> {
        let request = self.build_request(event_name, &ingredients)?;

        tracing::debug!(
            event = event_name,
            values = ingredients.len(),
            "Triggering webhook event"
        );
        let response = self.client.request(request).await?;

        if response.is_ok() {
            tracing::debug!(event = event_name, "Webhook event accepted");
            return Ok(());
        }

        let status_code = response.status.as_u16();
        let content = response.body_text();
        tracing::warn!(
            event = event_name,
            status = status_code,
            "Webhook event rejected: {content}"
        );

        Err(IftttError::RequestFailed {
            status_code,
            content,
        })
    }

    /// Triggers `event_name` with up to three positional values.
    ///
    /// Callers mixing value types can build [`Ingredients`] and use
    /// [`trigger`](Self::trigger) instead.
    ///
    /// # Errors
    ///
    /// Same as [`trigger`](Self::trigger).
    pub async fn trigger_values(
        &self,
        event_name: &str,
        value1: Option<Ingredient>,
        value2: Option<Ingredient>,
        value3: Option<Ingredient>,
    ) -> Result<(), IftttError> {
        let ingredients = Ingredients::from_options(value1, value2, value3);
        self.trigger(event_name, ingredients).await
    }

    /// Sends an email through the `send_gmail` applet.
    ///
    /// `to`, `subject` and `body` map to `value1`, `value2` and `value3`.
    /// The applet must exist in the account.
    ///
    /// # Errors
    ///
    /// Same as [`trigger`](Self::trigger).
    pub async fn gmail(
        &self,
        to: &str,
        subject: Option<&str>,
        body: Option<&str>,
    ) -> Result<(), IftttError> {
        self.trigger_values(
            GMAIL_EVENT,
            Some(to.into()),
            subject.map(Into::into),
            body.map(Into::into),
        )
        .await
    }

    /// Sends a mobile notification through the `notification` applet.
    ///
    /// `title`, `message` and `url` map to `value1`, `value2` and `value3`.
    /// The applet must exist in the account.
    ///
    /// # Errors
    ///
    /// Same as [`trigger`](Self::trigger).
    pub async fn notification(
        &self,
        title: Option<&str>,
        message: Option<&str>,
        url: Option<&str>,
    ) -> Result<(), IftttError> {
        self.trigger_values(
            NOTIFICATION_EVENT,
            title.map(Into::into),
            message.map(Into::into),
            url.map(Into::into),
        )
        .await
    }

    fn build_request(
        &self,
        event_name: &str,
        ingredients: &Ingredients,
    ) -> Result<HttpRequest, IftttError> {
        if event_name.is_empty() {
            return Err(IftttError::EmptyEventName);
        }

        let url = self.template.render(event_name, &self.key)?;
        Ok(HttpRequest::post_json(url, ingredients)?)
    }
}
