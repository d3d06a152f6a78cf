use std::fmt;

use serde::{Deserialize, Serialize};

/// A source line reduced to its comparison key.
///
/// Two lines are considered the same by the aligner exactly when their
/// normalized text is equal. A normalized line carries no identity beyond its
/// value: distinct physical lines with equal text are interchangeable.
///
/// Lines that normalize to the empty string (blank lines, comment-only lines)
/// all compare equal to each other.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedLine(String);

impl NormalizedLine {
    /// Wrap already-normalized text.
    ///
    /// No normalization is applied here; use `linemap_diff::normalize_line`
    /// to derive a key from raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the line, returning the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedLine({:?})", self.0)
    }
}

impl fmt::Display for NormalizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedLine {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NormalizedLine {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The normalized lines of one file, in file order.
///
/// Positions are 1-based: the first line is position 1. A sequence is built
/// once per file read and is not mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineSequence(Vec<NormalizedLine>);

impl LineSequence {
    pub fn new(lines: Vec<NormalizedLine>) -> Self {
        Self(lines)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Line at a 1-based position. Position 0 and positions past the end
    /// return `None`.
    pub fn get(&self, pos: usize) -> Option<&NormalizedLine> {
        pos.checked_sub(1).and_then(|idx| self.0.get(idx))
    }

    /// The lines as a 0-indexed slice.
    pub fn as_slice(&self) -> &[NormalizedLine] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedLine> {
        self.0.iter()
    }
}

impl From<Vec<NormalizedLine>> for LineSequence {
    fn from(lines: Vec<NormalizedLine>) -> Self {
        Self(lines)
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self(lines.into_iter().map(NormalizedLine::from).collect())
    }
}

impl From<&[&str]> for LineSequence {
    fn from(lines: &[&str]) -> Self {
        lines.iter().copied().collect()
    }
}

impl<'a> FromIterator<&'a str> for LineSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(NormalizedLine::from).collect())
    }
}

impl FromIterator<NormalizedLine> for LineSequence {
    fn from_iter<I: IntoIterator<Item = NormalizedLine>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a NormalizedLine;
    type IntoIter = std::slice::Iter<'a, NormalizedLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
