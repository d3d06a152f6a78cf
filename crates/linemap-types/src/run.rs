use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::mapping::{LocationMapping, MappingKind};

/// Summary counts for one version's mappings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSummary {
    /// Mappings with both sides present.
    pub matched: usize,
    /// Original lines with no counterpart in the version.
    pub removed: usize,
    /// Version lines with no counterpart in the original.
    pub added: usize,
}

impl VersionSummary {
    /// Count each mapping kind.
    pub fn from_mappings(mappings: &[LocationMapping]) -> Self {
        mappings
            .iter()
            .fold(Self::default(), |mut acc, m| {
                match m.kind() {
                    MappingKind::Matched => acc.matched += 1,
                    MappingKind::Deleted => acc.removed += 1,
                    MappingKind::Inserted => acc.added += 1,
                }
                acc
            })
    }

    /// Returns `true` if the counts cover an original of `original_len`
    /// lines and a version of `version_len` lines exactly.
    pub fn is_consistent_with(&self, original_len: usize, version_len: usize) -> bool {
        self.matched + self.removed == original_len && self.matched + self.added == version_len
    }
}

/// The alignment of one version file against the original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResult {
    /// 1-based version number, in submission order.
    pub number: usize,
    /// Mappings in emission order.
    pub mappings: Vec<LocationMapping>,
    /// Counts derived from `mappings`.
    pub summary: VersionSummary,
}

impl VersionResult {
    /// Build a result, deriving its summary from the mappings.
    pub fn new(number: usize, mappings: Vec<LocationMapping>) -> Result<Self, TypeError> {
        if number == 0 {
            return Err(TypeError::InvalidVersionNumber(number));
        }
        let summary = VersionSummary::from_mappings(&mappings);
        Ok(Self {
            number,
            mappings,
            summary,
        })
    }
}

/// The complete output of one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRun {
    /// Final path component of the original file.
    pub original_file_name: String,
    /// Run name as supplied by the user (not sanitized).
    pub run_name: String,
    /// One result per version, in submission order.
    pub versions: Vec<VersionResult>,
}

impl AlignmentRun {
    pub fn new(
        original_file_name: impl Into<String>,
        run_name: impl Into<String>,
        versions: Vec<VersionResult>,
    ) -> Self {
        Self {
            original_file_name: original_file_name.into(),
            run_name: run_name.into(),
            versions,
        }
    }

    /// Summaries of every version, in order.
    pub fn summaries(&self) -> impl Iterator<Item = (usize, VersionSummary)> + '_ {
        self.versions.iter().map(|v| (v.number, v.summary))
    }
}
