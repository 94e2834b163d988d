use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History storage error: {0}")]
    Storage(#[from] sled::Error),
    #[error("History serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
