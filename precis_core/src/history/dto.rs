use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful summarization as kept in client history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub original_text: String,
    pub summary: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(original_text: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            summary: summary.into(),
            timestamp: Utc::now(),
        }
    }
}
