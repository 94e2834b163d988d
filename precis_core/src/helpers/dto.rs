use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub enum Endpoints {
    Summarize,
}

impl Endpoints {
    pub fn url(&self, backend_url: &str) -> String {
        format!("{}{}", backend_url.trim_end_matches('/'), self)
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            &Endpoints::Summarize => write!(f, "/summarize"),
        }
    }
}

/// Body of `POST /summarize`. A missing `text` is accepted here and rejected by validation.
#[derive(Deserialize, Serialize, Debug, Clone, Default, ToSchema)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Caller-facing result of a summarization: exactly one of `summary` or `error`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum SummaryResponse {
    Summary { summary: String },
    Error { error: String },
}

impl SummaryResponse {
    pub fn summary(summary: impl Into<String>) -> Self {
        SummaryResponse::Summary {
            summary: summary.into(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoints::Summarize.url("http://localhost:3000/"),
            "http://localhost:3000/summarize"
        );
        assert_eq!(
            Endpoints::Summarize.url("http://localhost:3000"),
            "http://localhost:3000/summarize"
        );
    }

    #[test]
    fn test_summary_response_shapes() {
        let ok = serde_json::to_value(SummaryResponse::summary("done")).unwrap();
        assert_eq!(ok, serde_json::json!({ "summary": "done" }));

        let err = serde_json::to_value(SummaryResponse::Error {
            error: "bad".to_string(),
        }).unwrap();
        assert_eq!(err, serde_json::json!({ "error": "bad" }));

        let parsed: SummaryResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(
            parsed,
            SummaryResponse::Error {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_summary_request_without_text() {
        let request: SummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }
}
