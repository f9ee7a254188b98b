//! Small helpers shared across the codebase.

/// Truncate a string to at most `max_chars` characters.
///
/// Operates on character boundaries, so multi-byte text never causes a
/// mid-codepoint slice.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
