use sled::{Db, Tree};
use std::path::Path;
use std::sync::Mutex;

use super::dto::HistoryEntry;
use super::error::HistoryError;

pub const HISTORY_TREE: &str = "summary_history";
pub const HISTORY_KEY: &str = "history";

/// Ordered summary history, newest first.
///
/// The whole sequence lives under one key and every write replaces it. There
/// is no size cap, so the stored value grows with every summary until cleared.
pub trait HistoryStore {
    /// All entries, newest first. Absent or unreadable data yields an empty list.
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Put `entry` at the front and persist the full sequence.
    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError>;

    fn clear(&self) -> Result<(), HistoryError>;
}

fn decode_history(bytes: &[u8]) -> Vec<HistoryEntry> {
    match serde_json::from_slice::<Vec<HistoryEntry>>(bytes) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Discarding unreadable summary history: {}", e);
            Vec::new()
        }
    }
}

/// History persisted in a sled tree as a JSON array.
pub struct SledHistoryStore {
    tree: Tree,
}

impl SledHistoryStore {
    pub fn new(db: &Db) -> Result<Self, HistoryError> {
        let tree = db.open_tree(HISTORY_TREE)?;
        Ok(Self { tree })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let db = sled::open(path)?;
        Self::new(&db)
    }
}

impl HistoryStore for SledHistoryStore {
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self
            .tree
            .get(HISTORY_KEY)?
            .map(|bytes| decode_history(&bytes))
            .unwrap_or_default())
    }

    /// Read-modify-write under compare-and-swap, retried until no other
    /// writer has replaced the sequence in between.
    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        loop {
            let current = self.tree.get(HISTORY_KEY)?;
            let mut entries = current.as_deref().map(decode_history).unwrap_or_default();
            entries.insert(0, entry.clone());

            let json_data = serde_json::to_vec(&entries)?;
            match self
                .tree
                .compare_and_swap(HISTORY_KEY, current, Some(json_data))?
            {
                Ok(()) => {
                    self.tree.flush()?;
                    log::debug!("Summary history now holds {} entries", entries.len());
                    return Ok(());
                }
                Err(_) => log::debug!("Summary history changed during append, retrying"),
            }
        }
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.tree.remove(HISTORY_KEY)?;
        self.tree.flush()?;
        Ok(())
    }
}

/// Process-local history, serialized the same way as the persisted one.
#[derive(Default)]
pub struct MemoryHistoryStore {
    raw: Mutex<Option<Vec<u8>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw bytes, as if another writer had left them there.
    pub fn with_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Vec<u8>>> {
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn read_all(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self
            .slot()
            .as_deref()
            .map(decode_history)
            .unwrap_or_default())
    }

    fn append(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut slot = self.slot();
        let mut entries = slot.as_deref().map(decode_history).unwrap_or_default();
        entries.insert(0, entry);
        *slot = Some(serde_json::to_vec(&entries)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        *self.slot() = None;
        Ok(())
    }
}
