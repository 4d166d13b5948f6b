//! Inbound message filtering.

/// The literal trigger, trailing space included. `"items …"` does not match.
const COMMAND_PREFIX: &str = "item ";

/// Extract the search query from a trigger message.
///
/// Returns `None` for anything the adapter should ignore outright: text that
/// does not start case-insensitively with the five-character `"item "`
/// prefix, and prefixed text whose remainder trims to nothing. Ignored
/// messages get no reply at all.
pub fn parse_item_command(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() < COMMAND_PREFIX.len()
        || !bytes[..COMMAND_PREFIX.len()].eq_ignore_ascii_case(COMMAND_PREFIX.as_bytes())
    {
        return None;
    }

    // The prefix is pure ASCII, so this index is a char boundary.
    let query = trimmed[COMMAND_PREFIX.len()..].trim();
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// Acknowledgment sent before the scrape starts, so the user knows the
/// request landed while the lookup (up to the 20-second wait) runs.
pub fn ack_message(query: &str) -> String {
    format!("🔎 Searching for '{query}' on Steam Market...")
}
