use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Sentinel line number marking "no corresponding line on this side".
///
/// Part of the persisted output format; never a valid line number.
pub const ABSENT: i64 = -1;

/// One step of an edit script. Positions are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    /// Original line `orig` corresponds to new line `new`.
    Match { orig: usize, new: usize },
    /// Original line `orig` has no counterpart in the new file.
    Delete { orig: usize },
    /// New line `new` has no counterpart in the original file.
    Insert { new: usize },
}

impl EditOperation {
    /// Convert to the `(orig, new)` pair form, using [`ABSENT`] for the
    /// missing side.
    pub fn to_mapping(self) -> LocationMapping {
        match self {
            Self::Match { orig, new } => LocationMapping::matched(orig, new),
            Self::Delete { orig } => LocationMapping::deleted(orig),
            Self::Insert { new } => LocationMapping::inserted(new),
        }
    }
}

impl From<EditOperation> for LocationMapping {
    fn from(op: EditOperation) -> Self {
        op.to_mapping()
    }
}

/// The three legal shapes of a [`LocationMapping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    Matched,
    Deleted,
    Inserted,
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::Deleted => write!(f, "deleted"),
            Self::Inserted => write!(f, "inserted"),
        }
    }
}

/// A correspondence between an original line and a new line.
///
/// Exactly one of the following holds:
/// - both sides are positive (the line was matched),
/// - `orig > 0` and `new == -1` (the line was deleted from the original),
/// - `orig == -1` and `new > 0` (the line was inserted in the new file).
///
/// The fields are private so that the constructors can keep this true.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMapping", into = "RawMapping")]
pub struct LocationMapping {
    orig: i64,
    new: i64,
}

impl LocationMapping {
    /// Validate and build a mapping from raw line numbers.
    pub fn new(orig: i64, new: i64) -> Result<Self, TypeError> {
        let reason = match (orig, new) {
            (ABSENT, ABSENT) => "both sides are absent",
            (o, n) if o == 0 || n == 0 => "line numbers are 1-based",
            (o, _) if o < ABSENT => "original line number is negative",
            (_, n) if n < ABSENT => "new line number is negative",
            _ => return Ok(Self { orig, new }),
        };
        Err(TypeError::InvalidMapping { orig, new, reason })
    }

    /// A matched pair. Both positions are 1-based.
    pub fn matched(orig: usize, new: usize) -> Self {
        debug_assert!(orig > 0 && new > 0);
        Self {
            orig: orig as i64,
            new: new as i64,
        }
    }

    /// An original line with no counterpart in the new file.
    pub fn deleted(orig: usize) -> Self {
        debug_assert!(orig > 0);
        Self {
            orig: orig as i64,
            new: ABSENT,
        }
    }

    /// A new line with no counterpart in the original file.
    pub fn inserted(new: usize) -> Self {
        debug_assert!(new > 0);
        Self {
            orig: ABSENT,
            new: new as i64,
        }
    }

    /// Original line number, or `-1` when absent.
    pub fn orig(&self) -> i64 {
        self.orig
    }

    /// New line number, or `-1` when absent.
    pub fn new_line(&self) -> i64 {
        self.new
    }

    /// Original position, if present.
    pub fn orig_pos(&self) -> Option<usize> {
        (self.orig > 0).then_some(self.orig as usize)
    }

    /// New position, if present.
    pub fn new_pos(&self) -> Option<usize> {
        (self.new > 0).then_some(self.new as usize)
    }

    pub fn kind(&self) -> MappingKind {
        match (self.orig, self.new) {
            (ABSENT, _) => MappingKind::Inserted,
            (_, ABSENT) => MappingKind::Deleted,
            _ => MappingKind::Matched,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.kind() == MappingKind::Matched
    }
}

impl fmt::Debug for LocationMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.orig, self.new)
    }
}

/// Wire form of a mapping: plain integers with the `-1` sentinel.
#[derive(Serialize, Deserialize)]
struct RawMapping {
    orig: i64,
    new: i64,
}

impl TryFrom<RawMapping> for LocationMapping {
    type Error = TypeError;

    fn try_from(raw: RawMapping) -> Result<Self, Self::Error> {
        Self::new(raw.orig, raw.new)
    }
}

impl From<LocationMapping> for RawMapping {
    fn from(m: LocationMapping) -> Self {
        Self {
            orig: m.orig,
            new: m.new,
        }
    }
}
