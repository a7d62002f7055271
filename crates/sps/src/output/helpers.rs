//! Common helper functions for output formatting.

/// Width of section separators.
const SEPARATOR_WIDTH: usize = 60;

/// Returns the separator line used between targets.
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Truncates a string to a maximum length.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    } else {
        s.to_string()
    }
}

/// Formats a count with its noun: "1 track", "3 tracks".
pub fn count_tracks(count: usize) -> String {
    if count == 1 {
        "1 track".to_string()
    } else {
        format!("{count} tracks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_width() {
        assert_eq!(separator().len(), 60);
        assert!(separator().chars().all(|c| c == '='));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long track title", 10), "a very ...");
    }

    #[test]
    fn test_count_tracks() {
        assert_eq!(count_tracks(0), "0 tracks");
        assert_eq!(count_tracks(1), "1 track");
        assert_eq!(count_tracks(5), "5 tracks");
    }
}
