//! HTTP client for the loan-origination application endpoint

use super::payload::SubmissionPayload;
use super::traits::SubmissionClientTrait;
use crate::config::AppConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;

/// Errors from a submission round trip
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Connection, timeout or protocol failure
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        let description = if err.is_timeout() {
            "The request timed out".to_string()
        } else if err.is_connect() {
            format!("Could not reach the application server: {err}")
        } else {
            format!("Network error: {err}")
        };
        SubmissionError::Transport(description)
    }
}

/// A successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub status: u16,
    /// Response body as JSON, or a JSON string when the body was not JSON
    pub body: serde_json::Value,
}

impl SubmissionReceipt {
    /// Server-provided message from a `{"message": ...}` envelope
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(|m| m.as_str())
    }
}

/// Error envelope returned by the application endpoint
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Client for posting applications over HTTP
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Result<Self, SubmissionError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SubmissionError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionClientTrait for HttpSubmissionClient {
    async fn submit_application(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, "posting application");

        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            tracing::info!(status = status.as_u16(), "application accepted");
            let body = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::String(text));
            return Ok(SubmissionReceipt {
                status: status.as_u16(),
                body,
            });
        }

        let message = rejection_message(status, &text);
        tracing::warn!(status = status.as_u16(), %message, "application rejected");
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Best-effort human-readable message for a failed response
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorEnvelope {
        message: Some(message),
    }) = serde_json::from_str::<ErrorEnvelope>(body)
    {
        if !message.trim().is_empty() {
            return message;
        }
    }

    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
        return body.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("Request failed with status {} ({reason})", status.as_u16()),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::filled_form;
    use crate::submission::build_payload;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpSubmissionClient {
        let config = AppConfig {
            endpoint: Some(format!("{}/apply", server.uri())),
            request_timeout_secs: Some(2),
        };
        HttpSubmissionClient::new(&config).unwrap()
    }

    fn payload() -> SubmissionPayload {
        build_payload(&filled_form(), 1_750_000_000_000)
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/apply"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "loan": {"displayId": "Loan Application - 1750000000000"}
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"data": {"id": 7}, "message": "Application received"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client_for(&server)
            .submit_application(&payload())
            .await
            .unwrap();

        assert_eq!(receipt.status, 201);
        assert_eq!(receipt.message(), Some("Application received"));
        assert_eq!(receipt.body["data"]["id"], json!(7));
    }

    #[tokio::test]
    async fn test_plain_text_success_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let receipt = client_for(&server)
            .submit_application(&payload())
            .await
            .unwrap();
        assert_eq!(receipt.body, json!("ok"));
        assert_eq!(receipt.message(), None);
    }

    #[tokio::test]
    async fn test_server_error_message_preferred() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "SSN already on file",
                "errors": []
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit_application(&payload())
            .await
            .unwrap_err();

        match err {
            SubmissionError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "SSN already on file");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_reason_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .submit_application(&payload())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Request failed with status 500 (Internal Server Error)"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let config = AppConfig {
            endpoint: Some("http://127.0.0.1:9/apply".to_string()),
            request_timeout_secs: Some(2),
        };
        let client = HttpSubmissionClient::new(&config).unwrap();

        let err = client.submit_application(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[test]
    fn test_rejection_message_plain_body() {
        assert_eq!(
            rejection_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
    }
}
