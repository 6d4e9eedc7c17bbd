//! Formatting and display logic
//!
//! Pure functions for preparing server-supplied strings for display.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Strip control characters from a server-supplied string
///
/// Filenames, error messages and code words come straight from the service.
/// A raw ESC byte in any of them would be interpreted by the terminal, so
/// every control character (including newlines) is dropped before rendering.
///
/// # Examples
/// ```
/// use dcastui::logic::formatting::sanitize_display;
///
/// assert_eq!(sanitize_display("report.pdf"), "report.pdf");
/// assert_eq!(sanitize_display("evil\u{1b}[2Jname"), "evil[2Jname");
/// assert_eq!(sanitize_display("line1\nline2"), "line1line2");
/// ```
pub fn sanitize_display(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}

/// Truncate a string to a display width, appending "…" when cut
///
/// Width is measured in terminal columns, so wide characters count as two.
pub fn truncate_to_width(input: &str, max_width: usize) -> String {
    if input.width() <= max_width {
        return input.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in input.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Shorten a content hash for compact display: first 8 and last 4 characters
pub fn short_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 16 {
        return hash.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_display("résumé 日本.txt"), "résumé 日本.txt");
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        assert_eq!(sanitize_display("\u{1b}]0;pwned\u{7}x"), "]0;pwnedx");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is 2 columns wide
        assert_eq!(truncate_to_width("日本語ファイル", 5), "日本…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("abc123"), "abc123");
        let full = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
        assert_eq!(short_hash(full), "9f86d081…0a08");
    }
}
