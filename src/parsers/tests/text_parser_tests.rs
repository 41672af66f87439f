use crate::parsers::text;

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text::normalize_whitespace(""), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(text::normalize_whitespace("   \n   \t   \r\n   "), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(text::normalize_whitespace("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn test_multiple_lines() {
        assert_eq!(
            text::normalize_whitespace("Line 1\nLine 2\nLine 3"),
            "Line 1 Line 2 Line 3"
        );
    }

    #[test]
    fn test_mixed_whitespace() {
        let input = "  Line 1  \n\n  Line 2  \t\r\n  Line 3  ";
        assert_eq!(text::normalize_whitespace(input), "Line 1 Line 2 Line 3");
    }

    #[test]
    fn test_multiple_spaces_between_words() {
        let input = "Hello    world!    This    is    a    test.";
        assert_eq!(text::normalize_whitespace(input), "Hello world! This is a test.");
    }

    #[test]
    fn test_unicode_whitespace() {
        // No-break space and ideographic space count as whitespace too
        let input = "ربح\u{00A0}\u{00A0}المال\u{3000}اليوم";
        assert_eq!(text::normalize_whitespace(input), "ربح المال اليوم");
    }
}

#[cfg(test)]
mod truncation_tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_limit() {
        assert_eq!(text::truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_exact_limit() {
        assert_eq!(text::truncate_chars("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(text::truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(text::truncate_chars("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let arabic = "استثمار آمن";
        let truncated = text::truncate_chars(arabic, 4);
        assert_eq!(truncated, "استث");
        assert_eq!(text::char_len(truncated), 4);
        assert!(truncated.len() > 4);
    }

    #[test]
    fn test_char_len() {
        assert_eq!(text::char_len(""), 0);
        assert_eq!(text::char_len("abc"), 3);
        assert_eq!(text::char_len("مال"), 3);
    }
}
