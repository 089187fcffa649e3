const MAX_PREVIEW_CHARS: usize = 80;

/// Shorten free-form user text for log output. Truncation is by character,
/// not byte, so multi-byte input (e.g. Bengali recipes) never splits a
/// code point.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let char_count = trimmed.chars().count();
    if char_count <= MAX_PREVIEW_CHARS {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_PREVIEW_CHARS).collect();
    format!("{}... ({} chars total)", head, char_count)
}
