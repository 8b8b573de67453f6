//! Error types for webhook operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong on the wire, before any status code was seen.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built for the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for key resolution.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key file exists but could not be read.
    #[error("Failed to read key file '{}': {source}", path.display())]
    FileRead {
        /// Path to the key file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The key file has no first line to take the key from.
    #[error("Key file '{}' is empty", path.display())]
    EmptyFile {
        /// Path to the key file
        path: PathBuf,
    },
}

/// Error type for URL template rendering.
#[derive(Debug, Error)]
#[error("URL template rendered an invalid URL '{url}': {source}")]
pub struct TemplateError {
    /// The rendered URL with the key redacted
    pub url: String,
    /// Underlying parse error
    #[source]
    pub source: url::ParseError,
}

/// Error type returned by [`IftttWebhook`](super::IftttWebhook).
#[derive(Debug, Error)]
pub enum IftttError {
    /// The service answered with a status other than 200.
    #[error("Status code: {status_code}, message: {content}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status_code: u16,
        /// Response body with surrounding newlines stripped
        content: String,
    },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The key could not be resolved.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// The URL template did not produce a usable URL.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// An event must be named.
    #[error("Event name must not be empty")]
    EmptyEventName,

    /// The ingredients could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Payload(#[from] serde_json::Error),
}

impl IftttError {
    /// Returns the HTTP status code if the service rejected the request.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
