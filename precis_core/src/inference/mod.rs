pub mod dto;
pub mod error;
pub mod handler;

pub use error::InferenceError;
pub use handler::SummarizerClient;
