//! HTTP request/response types and client trait.

use http::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use super::HttpError;

/// An HTTP request to be sent.
///
/// A plain value type built by [`IftttWebhook`](super::IftttWebhook) and
/// handed to an [`HttpClient`]. Uses the `http` crate types for method and
/// headers so any client library can consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Request body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST request whose body is `payload` encoded as JSON.
    ///
    /// Sets `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` cannot be serialized.
    pub fn post_json<T: Serialize + ?Sized>(
        url: url::Url,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(payload)?;
        let mut headers = http::HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            method: http::Method::POST,
            url,
            headers,
            body,
        })
    }

    /// Decodes the body as JSON.
    ///
    /// Mostly useful to inspect captured requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true only for `200 OK`.
    ///
    /// The Maker service answers every accepted trigger with 200, so other
    /// 2xx codes are not treated as success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == http::StatusCode::OK
    }

    /// Returns the body as text with leading and trailing newlines removed.
    ///
    /// Invalid UTF-8 sequences are replaced.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body)
            .trim_matches('\n')
            .to_string()
    }
}

/// Trait for making HTTP requests.
///
/// Abstracts the HTTP library so the webhook client can be driven by a mock
/// in tests and by [`ReqwestClient`](super::ReqwestClient) in production.
///
/// # Example
///
/// ```ignore
/// use ifttt_webhook::webhook::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct AlwaysOk;
///
/// impl HttpClient for AlwaysOk {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(http::StatusCode::OK, Vec::new()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// Any status code, including errors, is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - The request cannot be built ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}
