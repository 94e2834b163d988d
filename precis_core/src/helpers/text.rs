/// Character count of `text` after trimming surrounding whitespace.
pub fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

pub fn meets_min_length(text: &str, min_length: usize) -> bool {
    trimmed_len(text) >= min_length
}

/// First `max_chars` characters of `text`, with `...` appended when something was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
