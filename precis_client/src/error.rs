use precis_core::history::HistoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please paste some text to summarize.")]
    EmptyInput,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Could not generate a summary. Unexpected response from the server.")]
    UnexpectedResponse,
    #[error("Could not connect to the server. Check that the backend is running.")]
    Connection(#[source] reqwest::Error),
    #[error("Could not copy the summary, please copy it manually: {0}")]
    Clipboard(String),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
