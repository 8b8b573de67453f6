//! Application execution logic.
//!
//! Connects the webhook client and performs the configured action.

use thiserror::Error;

use ifttt_webhook::config::{Action, ValidatedConfig};
use ifttt_webhook::webhook::{HttpClient, IftttError, IftttWebhook, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The key could not be resolved or was rejected by the service.
    #[error("Failed to connect to webhook service: {0}")]
    Connect(#[source] IftttError),

    /// The action's trigger failed.
    #[error("Failed to send {action}: {source}")]
    Send {
        /// Short description of the action
        action: String,
        /// Underlying webhook error
        #[source]
        source: IftttError,
    },
}

/// Executes the configured action with the production HTTP client.
///
/// # Errors
///
/// Returns an error if connecting or sending fails.
pub async fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    execute_with(ReqwestClient::new(), config).await
}

/// Executes the configured action with the given HTTP client.
///
/// This function:
/// 1. Builds the webhook client, which validates the key
/// 2. Sends the single configured action
pub async fn execute_with<H: HttpClient>(
    client: H,
    config: &ValidatedConfig,
) -> Result<(), RunError> {
    let webhook = IftttWebhook::with_template(client, &config.key, config.url_template.clone())
        .await
        .map_err(RunError::Connect)?;

    send(&webhook, &config.action)
        .await
        .map_err(|source| RunError::Send {
            action: config.action.to_string(),
            source,
        })?;

    tracing::info!("Sent {}", config.action);
    Ok(())
}

async fn send<H: HttpClient>(webhook: &IftttWebhook<H>, action: &Action) -> Result<(), IftttError> {
    match action {
        Action::Trigger { event, ingredients } => {
            webhook.trigger(event, ingredients.clone()).await
        }
        Action::Gmail { to, subject, body } => {
            webhook
                .gmail(to, subject.as_deref(), body.as_deref())
                .await
        }
        Action::Notify {
            title,
            message,
            url,
        } => {
            webhook
                .notification(title.as_deref(), message.as_deref(), url.as_deref())
                .await
        }
    }
}
