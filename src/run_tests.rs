//! Tests for the run module.

use std::sync::{Arc, Mutex};

use ifttt_webhook::config::Cli;
use ifttt_webhook::webhook::{HttpError, HttpRequest, HttpResponse};
use serde_json::json;

use super::*;

/// Mock client answering every request with one fixed status after the
/// validation trigger.
#[derive(Debug)]
struct MockClient {
    validation_status: u16,
    status: u16,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(validation_status: u16, status: u16) -> Arc<Self> {
        Arc::new(Self {
            validation_status,
            status,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut requests = self.requests.lock().unwrap();
        let status = if requests.is_empty() {
            self.validation_status
        } else {
            self.status
        };
        requests.push(req);

        Ok(HttpResponse::new(
            http::StatusCode::from_u16(status).unwrap(),
            b"response\n".to_vec(),
        ))
    }
}

fn config(args: &[&str]) -> ValidatedConfig {
    let cli = Cli::parse_from_iter(
        ["ifttt-webhook", "--key", "K", "--url-template", "https://x/{event_name}/{key}"]
            .into_iter()
            .chain(args.iter().copied()),
    );
    ValidatedConfig::from_raw(&cli, None).unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn connect_displays_source() {
        let error = RunError::Connect(IftttError::RequestFailed {
            status_code: 401,
            content: "bad key".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Failed to connect to webhook service: Status code: 401, message: bad key"
        );
    }

    #[test]
    fn send_names_action() {
        let error = RunError::Send {
            action: "gmail".to_string(),
            source: IftttError::EmptyEventName,
        };
        assert!(error.to_string().starts_with("Failed to send gmail"));
    }
}

mod execution {
    use super::*;

    #[tokio::test]
    async fn trigger_sends_event_after_validation() {
        let client = MockClient::new(200, 200);

        execute_with(
            Arc::clone(&client),
            &config(&["trigger", "ev", "--value2", "b"]),
        )
        .await
        .unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url.as_str(), "https://x/key_test_event/K");
        assert_eq!(requests[1].url.as_str(), "https://x/ev/K");
        assert_eq!(requests[1].json_body().unwrap(), json!({"value2": "b"}));
    }

    #[tokio::test]
    async fn gmail_uses_send_gmail_event() {
        let client = MockClient::new(200, 200);

        execute_with(
            Arc::clone(&client),
            &config(&["gmail", "--to", "a@b.com", "--subject", "Hi"]),
        )
        .await
        .unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests[1].url.as_str(), "https://x/send_gmail/K");
        assert_eq!(
            requests[1].json_body().unwrap(),
            json!({"value1": "a@b.com", "value2": "Hi"})
        );
    }

    #[tokio::test]
    async fn notify_uses_notification_event() {
        let client = MockClient::new(200, 200);

        execute_with(Arc::clone(&client), &config(&["notify", "--title", "T"]))
            .await
            .unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests[1].url.as_str(), "https://x/notification/K");
        assert_eq!(requests[1].json_body().unwrap(), json!({"value1": "T"}));
    }

    #[tokio::test]
    async fn rejected_key_stops_before_action() {
        let client = MockClient::new(401, 200);

        let err = execute_with(Arc::clone(&client), &config(&["notify"]))
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Connect(_)));
        assert_eq!(client.captured_requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_action_reports_status() {
        let client = MockClient::new(200, 500);

        let err = execute_with(Arc::clone(&client), &config(&["trigger", "ev"]))
            .await
            .unwrap_err();

        match err {
            RunError::Send { action, source } => {
                assert_eq!(action, "trigger ev (0 values)");
                assert_eq!(source.status_code(), Some(500));
                assert_eq!(source.to_string(), "Status code: 500, message: response");
            }
            other => panic!("Expected Send, got {other:?}"),
        }
    }
}
