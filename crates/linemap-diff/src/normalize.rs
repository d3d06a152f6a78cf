//! Line normalization: comment stripping and whitespace trimming.
//!
//! Only single-line comments are recognized. A `/*` without a `*/` later on
//! the same line is left in place; there is no multi-line comment tracking.

use linemap_types::{LineSequence, NormalizedLine};

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Reduce a raw line to its comparison key.
///
/// 1. Everything from the first `//` onwards is dropped.
/// 2. Each `/* ... */` span on the line is removed, left to right.
/// 3. Surrounding whitespace, including the ASCII separators `\x1c`..=`\x1f`,
///    is trimmed.
///
/// A line that is empty after this (blank, or comment only) compares equal to
/// every other such line.
pub fn normalize_line(raw: &str) -> NormalizedLine {
    let mut line = match raw.find(LINE_COMMENT) {
        Some(idx) => raw[..idx].to_string(),
        None => raw.to_string(),
    };

    while line.contains(BLOCK_OPEN) && line.contains(BLOCK_CLOSE) {
        let Some(start) = line.find(BLOCK_OPEN) else {
            break;
        };
        let body = start + BLOCK_OPEN.len();
        let Some(offset) = line[body..].find(BLOCK_CLOSE) else {
            break;
        };
        let end = body + offset + BLOCK_CLOSE.len();
        line.replace_range(start..end, "");
    }

    NormalizedLine::new(line.trim_matches(is_strip_char))
}

/// Characters trimmed from both ends of a line: Unicode whitespace plus the
/// ASCII file, group, record and unit separators (`\x1c`..=`\x1f`).
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split file contents into lines and normalize each one.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final line terminator
/// does not start an extra empty line.
pub fn normalize_text(text: &str) -> LineSequence {
    if !text.contains('\r') {
        return text.lines().map(normalize_line).collect();
    }
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.lines().map(normalize_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize_line(s).into_string()
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(norm("   int x = 1;\t "), "int x = 1;");
    }

    #[test]
    fn trims_ascii_separators() {
        assert_eq!(norm("x\u{1f}"), "x");
        assert_eq!(norm("\u{1c}\u{1d} y \u{1e}"), "y");
        assert_eq!(norm("a\u{1f}b"), "a\u{1f}b");
    }

    #[test]
    fn strips_line_comment() {
        assert_eq!(norm("return x; // done"), "return x;");
        assert_eq!(norm("// whole line"), "");
    }

    #[test]
    fn line_comment_cuts_at_first_marker() {
        assert_eq!(norm("a // b // c"), "a");
    }

    #[test]
    fn strips_inline_block_comment() {
        assert_eq!(norm(r#""int"/*nonNLS*/"#), r#""int""#);
        assert_eq!(norm(r#""int" /* comment */"#), r#""int""#);
    }

    #[test]
    fn strips_multiple_block_comments() {
        assert_eq!(norm("a /* x */ b /* y */ c"), "a  b  c");
    }

    #[test]
    fn unterminated_block_comment_is_kept() {
        assert_eq!(norm("int x; /* starts here"), "int x; /* starts here");
    }

    #[test]
    fn close_before_open_is_not_a_span() {
        assert_eq!(norm("*/ a /* b"), "*/ a /* b");
    }

    #[test]
    fn close_marker_must_follow_open_marker() {
        // "/*/" does not close itself; the span ends at the next "*/".
        assert_eq!(norm("a /*/ b */ c"), "a  c");
    }

    #[test]
    fn line_comment_inside_block_comment_truncates_first() {
        assert_eq!(norm("a /* // */ b"), "a /*");
    }

    #[test]
    fn comment_only_line_equals_blank_line() {
        assert_eq!(normalize_line("/* header */"), normalize_line(""));
        assert_eq!(normalize_line("   // note"), normalize_line("\t"));
    }

    #[test]
    fn text_split_drops_crlf_and_final_newline() {
        let seq = normalize_text("a\r\n  b // c\r\n\r\nd\n");
        let lines: Vec<&str> = seq.iter().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["a", "b", "", "d"]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let seq = normalize_text("a\rb\r");
        let lines: Vec<&str> = seq.iter().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(normalize_text("").is_empty());
    }

    #[test]
    fn text_without_final_newline_keeps_last_line() {
        assert_eq!(normalize_text("x\ny").len(), 2);
    }
}
