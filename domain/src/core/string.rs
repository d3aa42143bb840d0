//! String utilities for the domain layer.

/// Shorten `s` to at most `max_len` bytes, ending in `...`.
///
/// Never splits a UTF-8 character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let budget = max_len.saturating_sub(3);
    let end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= budget)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Halo, aku Fadel", 30), "Halo, aku Fadel");
        // "é" is 2 bytes: a 5-byte budget fits two of them
        assert_eq!(truncate("ééééé", 8), "éé...");
    }

    #[test]
    fn test_truncate_emoji() {
        // Each emoji is 4 bytes: max_len=10 leaves a 7-byte budget
        assert_eq!(truncate("\u{1F4DA}\u{1F30D}\u{1F389}", 10), "\u{1F4DA}...");
        assert_eq!(truncate("\u{1F4DA}\u{1F30D}\u{1F389}", 11), "\u{1F4DA}\u{1F30D}...");
    }
}
