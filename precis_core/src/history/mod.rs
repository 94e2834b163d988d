pub mod dto;
pub mod error;
pub mod storage;

pub use dto::HistoryEntry;
pub use error::HistoryError;
pub use storage::{HistoryStore, MemoryHistoryStore, SledHistoryStore};
