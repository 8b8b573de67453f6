//! Tests for `ReqwestClient`.
//!
//! Only construction and failure classification are covered here; the
//! request path against a live endpoint is exercised manually.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_same_as_new() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        assert!(format!("{client1:?}").contains("ReqwestClient"));
        assert!(format!("{client2:?}").contains("ReqwestClient"));
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/trigger").unwrap();
        let req = HttpRequest::post_json(url, &serde_json::json!({})).unwrap();

        let result = client.request(req).await;

        // Behind a proxy the failure may come back as an HTTP error status.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.is_ok() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
