//! Utility functions for safe string operations
//!
//! Snippets are cut from arbitrary source files, so every truncation has to
//! land on a UTF-8 char boundary.

/// Safely truncate a string at a UTF-8 char boundary.
///
/// # Examples
/// ```
/// use archhealth::utils::truncate_to_char_boundary;
///
/// assert_eq!(truncate_to_char_boundary("hello world", 5), "hello");
///
/// let s = "abc੨def"; // '੨' spans bytes 3-5
/// assert_eq!(truncate_to_char_boundary(s, 4), "abc");
/// ```
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Truncate and append "..." when anything was cut
pub fn truncate_with_ellipsis(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        s.to_string()
    } else {
        format!("{}...", truncate_to_char_boundary(s, max_bytes))
    }
}

/// First `max_lines` lines of `text`, capped at `max_bytes`
pub fn preview_lines(text: &str, max_lines: usize, max_bytes: usize) -> String {
    let head: Vec<&str> = text.lines().take(max_lines).collect();
    truncate_with_ellipsis(&head.join("\n"), max_bytes)
}

/// Count lines the way editors do: a trailing newline does not open a new line
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_char_boundary("hello", 100), "hello");
        assert_eq!(truncate_to_char_boundary("hello", 5), "hello");
        assert_eq!(truncate_to_char_boundary("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_utf8_3byte() {
        let s = "abc੨def";
        assert_eq!(truncate_to_char_boundary(s, 3), "abc");
        assert_eq!(truncate_to_char_boundary(s, 5), "abc");
        assert_eq!(truncate_to_char_boundary(s, 6), "abc੨");
    }

    #[test]
    fn test_truncate_zero_bytes() {
        assert_eq!(truncate_to_char_boundary("", 0), "");
        assert_eq!(truncate_to_char_boundary("੨", 0), "");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello", 100), "hello");
        assert_eq!(truncate_with_ellipsis("hello world", 5), "hello...");
    }

    #[test]
    fn test_preview_lines() {
        let text = "one\ntwo\nthree\nfour\n";
        assert_eq!(preview_lines(text, 2, 100), "one\ntwo");
        assert_eq!(preview_lines(text, 10, 100), "one\ntwo\nthree\nfour");
        assert_eq!(preview_lines(text, 2, 4), "one\n...");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb\n"), 2);
    }
}
