use log::{debug, error};
use reqwest::Client;
use serde_json::Value;

use super::dto::{UpstreamOptions, UpstreamRequest, UpstreamSummary};
use super::error::InferenceError;
use crate::helpers::config::InferenceConfig;

/// Client for the hosted summarization model. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct SummarizerClient {
    client: Client,
    config: InferenceConfig,
}

impl SummarizerClient {
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn has_token(&self) -> bool {
        self.config.api_token.is_some()
    }

    /// Send `text` upstream once and return the trimmed summary.
    ///
    /// The call is bounded by the configured timeout. Dropping the returned
    /// future aborts the in-flight request.
    pub async fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        let token = self
            .config
            .api_token
            .as_deref()
            .ok_or(InferenceError::MissingToken)?;

        let request = UpstreamRequest {
            inputs: text,
            options: self
                .config
                .wait_for_model
                .then_some(UpstreamOptions {
                    wait_for_model: true,
                }),
        };

        debug!(
            "Sending {} characters to summarization API at {}",
            text.chars().count(),
            self.config.api_url
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach summarization API: {}", e);
                if e.is_timeout() {
                    error!("Request timed out after {:?}", self.config.timeout);
                }
                InferenceError::Transport(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read summarization API response: {}", e);
            InferenceError::Transport(e)
        })?;

        if !status.is_success() {
            let detail = extract_error_detail(&body);
            error!(
                "Summarization API error (backend): {} {}",
                status.as_u16(),
                detail
            );
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        parse_summary(&body)
    }
}

/// Best-effort detail from an upstream error body: the `error` field when the
/// body is JSON and the field is set, the whole JSON value otherwise, the raw
/// text when not JSON.
pub fn extract_error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => match value.get("error") {
            Some(detail) if is_blank(detail) => value.to_string(),
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => value.to_string(),
        },
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// `null`, `false`, `0` and `""` carry no detail.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Parse a successful upstream body. Only the first array element has to
/// carry `summary_text`; anything after it is ignored.
pub fn parse_summary(body: &[u8]) -> Result<String, InferenceError> {
    let results: Vec<Value> = serde_json::from_slice(body).map_err(|e| {
        error!("Unexpected summarization API payload: {}", e);
        InferenceError::UnexpectedShape
    })?;

    let first = results
        .into_iter()
        .next()
        .ok_or(InferenceError::UnexpectedShape)?;

    let result: UpstreamSummary = serde_json::from_value(first).map_err(|e| {
        error!("Unexpected first element in summarization API payload: {}", e);
        InferenceError::UnexpectedShape
    })?;

    let summary = result.summary_text.trim();
    if summary.is_empty() {
        return Err(InferenceError::UnexpectedShape);
    }

    Ok(summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/models/test-model";

    fn test_config(server: &MockServer, token: Option<&str>) -> InferenceConfig {
        InferenceConfig {
            api_url: format!("{}{}", server.uri(), MODEL_PATH),
            api_token: token.map(str::to_string),
            timeout: Duration::from_secs(5),
            ..InferenceConfig::default()
        }
    }

    #[test]
    fn test_extract_error_detail() {
        assert_eq!(
            extract_error_detail(br#"{"error":"Model is loading"}"#),
            "Model is loading"
        );
        assert_eq!(
            extract_error_detail(br#"{"error":["a","b"]}"#),
            r#"["a","b"]"#
        );
        assert_eq!(
            extract_error_detail(br#"{"message":"nope"}"#),
            r#"{"message":"nope"}"#
        );
        assert_eq!(extract_error_detail(b"Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_extract_error_detail_blank_error_field() {
        assert_eq!(
            extract_error_detail(br#"{"error":"","estimated_time":20}"#),
            r#"{"error":"","estimated_time":20}"#
        );
        assert_eq!(
            extract_error_detail(br#"{"error":null}"#),
            r#"{"error":null}"#
        );
        assert_eq!(
            extract_error_detail(br#"{"error":false}"#),
            r#"{"error":false}"#
        );
        assert_eq!(extract_error_detail(br#"{"error":0}"#), r#"{"error":0}"#);
    }

    #[test]
    fn test_parse_summary() {
        let summary = parse_summary(br#"[{"summary_text":"  A short summary.  "}]"#).unwrap();
        assert_eq!(summary, "A short summary.");

        assert!(matches!(
            parse_summary(b"[]"),
            Err(InferenceError::UnexpectedShape)
        ));
        assert!(matches!(
            parse_summary(br#"{"summary_text":"x"}"#),
            Err(InferenceError::UnexpectedShape)
        ));
        assert!(matches!(
            parse_summary(br#"[{"generated_text":"x"}]"#),
            Err(InferenceError::UnexpectedShape)
        ));
        assert!(matches!(
            parse_summary(br#"[{"summary_text":"   "}]"#),
            Err(InferenceError::UnexpectedShape)
        ));
    }

    #[test]
    fn test_parse_summary_ignores_trailing_elements() {
        let summary = parse_summary(br#"[{"summary_text":"  ok  "},{"label":"x"}]"#).unwrap();
        assert_eq!(summary, "ok");

        let summary = parse_summary(br#"[{"summary_text":"first"},{"summary_text":"second"}]"#)
            .unwrap();
        assert_eq!(summary, "first");

        assert!(matches!(
            parse_summary(br#"[{"label":"x"},{"summary_text":"ok"}]"#),
            Err(InferenceError::UnexpectedShape)
        ));
    }

    #[tokio::test]
    async fn test_summarize_success_sends_bearer_and_inputs() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({ "inputs": "some long text" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "summary_text": "  A short summary.  " }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SummarizerClient::new(test_config(&server, Some("test-token"))).unwrap();
        let summary = client.summarize("some long text").await.unwrap();

        assert_eq!(summary, "A short summary.");
    }

    #[tokio::test]
    async fn test_summarize_sends_wait_for_model_when_enabled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "inputs": "text",
                "options": { "wait_for_model": true }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "summary_text": "ok" }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut config = test_config(&server, Some("test-token"));
        config.wait_for_model = true;
        let client = SummarizerClient::new(config).unwrap();

        assert_eq!(client.summarize("text").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_summarize_without_token_makes_no_call() {
        let server = MockServer::start().await;
        let client = SummarizerClient::new(test_config(&server, None)).unwrap();

        let result = client.summarize("some long text").await;

        assert!(matches!(result, Err(InferenceError::MissingToken)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summarize_upstream_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_json(json!({ "error": "Model is currently loading" })),
            )
            .mount(&server)
            .await;

        let client = SummarizerClient::new(test_config(&server, Some("test-token"))).unwrap();

        match client.summarize("text").await {
            Err(InferenceError::Upstream { status, detail }) => {
                assert_eq!(status, 503);
                assert_eq!(detail, "Model is currently loading");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summarize_upstream_text_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = SummarizerClient::new(test_config(&server, Some("test-token"))).unwrap();

        match client.summarize("text").await {
            Err(InferenceError::Upstream { status, detail }) => {
                assert_eq!(status, 502);
                assert_eq!(detail, "<html>Bad Gateway</html>");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_summarize_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "summary_text": "late" }]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let mut config = test_config(&server, Some("test-token"));
        config.timeout = Duration::from_millis(200);
        let client = SummarizerClient::new(config).unwrap();

        assert!(matches!(
            client.summarize("text").await,
            Err(InferenceError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_summarize_unreachable() {
        let config = InferenceConfig {
            api_url: "http://127.0.0.1:9/models/none".to_string(),
            api_token: Some("test-token".to_string()),
            timeout: Duration::from_secs(2),
            ..InferenceConfig::default()
        };
        let client = SummarizerClient::new(config).unwrap();

        assert!(matches!(
            client.summarize("text").await,
            Err(InferenceError::Transport(_))
        ));
    }
}
