use precis_core::history::{HistoryEntry, HistoryStore};

use crate::error::ClientError;
use crate::services::handler::Services;

/// Submit text to the relay and record every successful summary in history.
///
/// Each call is independent: nothing prevents two submissions from running at
/// the same time, and both results are recorded in completion order.
pub struct SummarizeFlow<S: HistoryStore> {
    services: Services,
    history: S,
}

impl<S: HistoryStore> SummarizeFlow<S> {
    pub fn new(services: Services, history: S) -> Self {
        Self { services, history }
    }

    pub async fn submit(&self, text: &str) -> Result<HistoryEntry, ClientError> {
        let summary = self.services.summarize(text).await?;

        let entry = HistoryEntry::new(text.trim(), summary);
        self.history.append(entry.clone())?;

        Ok(entry)
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        Ok(self.history.read_all()?)
    }

    pub fn clear_history(&self) -> Result<(), ClientError> {
        self.history.clear()?;
        Ok(())
    }
}
