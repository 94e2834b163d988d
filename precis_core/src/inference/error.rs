use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("API token is not configured on the server.")]
    MissingToken,
    #[error("Could not reach the summarization API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Summarization API error. Status: {status}. Detail: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("Unexpected response from the summarization API: summary not found.")]
    UnexpectedShape,
}
