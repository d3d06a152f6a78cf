//! Reading version files as normalized line sequences.

use std::path::Path;

use linemap_diff::normalize_text;
use linemap_types::LineSequence;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Read a file and normalize each of its lines.
///
/// Content is decoded as UTF-8; invalid byte sequences are replaced with
/// U+FFFD rather than rejected. Line numbering follows the file exactly: one
/// entry per physical line.
pub fn read_normalized_lines(path: impl AsRef<Path>) -> IoResult<LineSequence> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = normalize_text(&String::from_utf8_lossy(&bytes));
    debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Base.java");
        std::fs::write(&path, "int a; // x\r\n  /* c */ int b;\r\n\r\n").unwrap();

        let lines = read_normalized_lines(&path).unwrap();
        let text: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
        assert_eq!(text, vec!["int a;", "int b;", ""]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        std::fs::write(&path, b"ok\n\xFF\xFEbad\n").unwrap();

        let lines = read_normalized_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.get(2).unwrap().as_str().ends_with("bad"));
        assert!(lines.get(2).unwrap().as_str().contains('\u{FFFD}'));
    }

    #[test]
    fn empty_file_has_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(read_normalized_lines(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.java");

        let err = read_normalized_lines(&path).unwrap_err();
        assert!(matches!(err, IoError::Read { .. }));
        assert!(err.to_string().contains("missing.java"));
    }
}
