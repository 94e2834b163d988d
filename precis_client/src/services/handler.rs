use log::{debug, error, info};
use reqwest::{Client, StatusCode};

use precis_core::helpers::dto::{Endpoints, SummaryRequest, SummaryResponse};

use crate::error::ClientError;

/// HTTP access to the relay's `/summarize` route.
#[derive(Clone)]
pub struct Services {
    client: Client,
    backend_url: String,
}

impl Services {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let client = Client::new();

        Self {
            client,
            backend_url: backend_url.into(),
        }
    }

    /// Summarize `text` through the relay. Input that is empty once trimmed is
    /// rejected here without touching the network.
    pub async fn summarize(&self, text: &str) -> Result<String, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let url = Endpoints::Summarize.url(&self.backend_url);
        debug!("🌐 Making summarize request to: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&SummaryRequest::new(text))
            .send()
            .await
            .map_err(|e| {
                error!("❌ Failed to connect to: {} ({})", url, e);
                ClientError::Connection(e)
            })?;

        let status = response.status();
        debug!("📡 Server response status: {}", status);

        let body = response.text().await.map_err(ClientError::Connection)?;

        if !status.is_success() {
            error!("❌ Backend error body: {}", body);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: compose_error_message(status, &body),
            });
        }

        match serde_json::from_str::<SummaryResponse>(&body) {
            Ok(SummaryResponse::Summary { summary }) if !summary.is_empty() => {
                info!("✅ Summary received ({} characters)", summary.chars().count());
                Ok(summary)
            }
            _ => {
                error!("❌ Unexpected success body: {}", body);
                Err(ClientError::UnexpectedResponse)
            }
        }
    }
}

/// Human-readable message for a failed relay call: the status, then the
/// relay's `error` detail, or the status reason when the body carries none.
pub fn compose_error_message(status: StatusCode, body: &str) -> String {
    let mut message = format!(
        "An error occurred while generating the summary. Status: {}.",
        status.as_u16()
    );

    match serde_json::from_str::<SummaryResponse>(body) {
        Ok(SummaryResponse::Error { error }) => {
            message.push_str(&format!(" Detail: {}", error));
        }
        _ => {
            if let Some(reason) = status.canonical_reason() {
                message.push_str(&format!(" Response: {}", reason));
            }
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_compose_error_message_with_detail() {
        let message = compose_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":"text too short or missing: at least 50 characters are required"}"#,
        );
        assert_eq!(
            message,
            "An error occurred while generating the summary. Status: 400. Detail: text too short or missing: at least 50 characters are required"
        );
    }

    #[test]
    fn test_compose_error_message_falls_back_to_reason() {
        let message = compose_error_message(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(
            message,
            "An error occurred while generating the summary. Status: 502. Response: Bad Gateway"
        );

        let message = compose_error_message(StatusCode::BAD_GATEWAY, r#"{"message":"x"}"#);
        assert!(message.ends_with("Response: Bad Gateway"));
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_request() {
        let server = MockServer::start().await;
        let services = Services::new(server.uri());

        assert!(matches!(
            services.summarize("   \n\t ").await,
            Err(ClientError::EmptyInput)
        ));
        assert!(matches!(
            services.summarize("").await,
            Err(ClientError::EmptyInput)
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summarize_sends_trimmed_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_json(json!({ "text": "some text" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "summary": "text" })))
            .expect(1)
            .mount(&server)
            .await;

        let services = Services::new(format!("{}/", server.uri()));
        assert_eq!(services.summarize("  some text \n").await.unwrap(), "text");
    }

    #[tokio::test]
    async fn test_summarize_missing_summary_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "x" })))
            .mount(&server)
            .await;

        let services = Services::new(server.uri());
        assert!(matches!(
            services.summarize("some text").await,
            Err(ClientError::UnexpectedResponse)
        ));
    }

    #[tokio::test]
    async fn test_summarize_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(
                    json!({ "error": "Summarization API error. Status: 503. Detail: loading" }),
                ),
            )
            .mount(&server)
            .await;

        let services = Services::new(server.uri());
        match services.summarize("some text").await {
            Err(ClientError::Server { status, message }) => {
                assert_eq!(status, 503);
                assert!(message.contains("Status: 503."));
                assert!(message.contains("Detail: Summarization API error"));
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summarize_connection_error() {
        let services = Services::new("http://127.0.0.1:9");
        let result = services.summarize("some text").await;

        assert!(matches!(result, Err(ClientError::Connection(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Could not connect to the server. Check that the backend is running."
        );
    }
}
