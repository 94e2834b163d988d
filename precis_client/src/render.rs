use chrono::{DateTime, Local, Utc};
use precis_core::{helpers::text::preview, history::HistoryEntry};

pub const PREVIEW_CHARS: usize = 100;
pub const EMPTY_HISTORY: &str = "No summaries in history yet.";

pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_entry(index + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_entry(ordinal: usize, entry: &HistoryEntry) -> String {
    format!(
        "Summary #{}\n{}\nOriginal: {}\nGenerated at: {}\n",
        ordinal,
        entry.summary,
        preview(&entry.original_text, PREVIEW_CHARS),
        format_timestamp(&entry.timestamp)
    )
}

/// Timestamp in the machine's local time zone.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
