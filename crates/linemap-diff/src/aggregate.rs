//! Per-version aggregation: one alignment for each version file, plus summary
//! counts.
//!
//! Alignment is pure, so versions may be aligned on separate threads. The
//! parallel path runs at most one batch of workers at a time, joins each batch
//! before starting the next, and always yields results in submission order.

use std::num::NonZeroUsize;
use std::thread;

use linemap_types::{AlignmentRun, LineSequence, VersionResult, VersionSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::align::align;

/// How [`build_run`] schedules the per-version alignments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateMode {
    /// Align versions one after another on the calling thread.
    #[default]
    Sequential,
    /// Align versions on scoped worker threads, one batch at a time.
    Parallel,
}

fn align_version(number: usize, original: &LineSequence, version: &LineSequence) -> VersionResult {
    let mappings = align(original, version);
    let summary = VersionSummary::from_mappings(&mappings);
    debug!(
        version = number,
        matched = summary.matched,
        removed = summary.removed,
        added = summary.added,
        "aligned version"
    );
    VersionResult {
        number,
        mappings,
        summary,
    }
}

/// Align every version against `original`, in order.
///
/// Version numbers are 1-based positions in `versions`.
pub fn aggregate(original: &LineSequence, versions: &[LineSequence]) -> Vec<VersionResult> {
    versions
        .iter()
        .enumerate()
        .map(|(idx, version)| align_version(idx + 1, original, version))
        .collect()
}

/// Like [`aggregate`], but aligns versions on worker threads.
///
/// At most `available_parallelism()` versions are aligned at once, since each
/// worker holds its own `(n+1) × (m+1)` table. The original is shared
/// read-only between workers. Output is identical to [`aggregate`].
pub fn aggregate_parallel(original: &LineSequence, versions: &[LineSequence]) -> Vec<VersionResult> {
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    aggregate_in_batches(original, versions, workers)
}

fn aggregate_in_batches(
    original: &LineSequence,
    versions: &[LineSequence],
    workers: usize,
) -> Vec<VersionResult> {
    if versions.len() < 2 || workers < 2 {
        return aggregate(original, versions);
    }

    let mut results = Vec::with_capacity(versions.len());
    for (batch_idx, batch) in versions.chunks(workers).enumerate() {
        let first_number = batch_idx * workers + 1;
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .enumerate()
                .map(|(idx, version)| {
                    scope.spawn(move || align_version(first_number + idx, original, version))
                })
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(result) => results.push(result),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });
    }
    results
}

/// Align all versions and assemble the top-level run.
pub fn build_run(
    original_file_name: impl Into<String>,
    run_name: impl Into<String>,
    original: &LineSequence,
    versions: &[LineSequence],
    mode: AggregateMode,
) -> AlignmentRun {
    let results = match mode {
        AggregateMode::Sequential => aggregate(original, versions),
        AggregateMode::Parallel => aggregate_parallel(original, versions),
    };
    AlignmentRun::new(original_file_name, run_name, results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(lines: &[&str]) -> LineSequence {
        LineSequence::from(lines)
    }

    fn sample_versions() -> Vec<LineSequence> {
        vec![
            seq(&["A", "C", "D"]),
            seq(&["A", "B", "C"]),
            seq(&[]),
            seq(&["Z", "A", "B", "C", "Z"]),
        ]
    }

    #[test]
    fn versions_are_numbered_in_submission_order() {
        let results = aggregate(&seq(&["A", "B", "C"]), &sample_versions());
        let numbers: Vec<usize> = results.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn summaries_match_expected_counts() {
        let results = aggregate(&seq(&["A", "B", "C"]), &sample_versions());
        let counts: Vec<(usize, usize, usize)> = results
            .iter()
            .map(|r| (r.summary.matched, r.summary.removed, r.summary.added))
            .collect();
        assert_eq!(counts, vec![(2, 1, 1), (3, 0, 0), (0, 3, 0), (3, 0, 2)]);
    }

    #[test]
    fn counts_are_consistent_with_lengths() {
        let original = seq(&["A", "B", "C"]);
        let versions = sample_versions();
        for (result, version) in aggregate(&original, &versions).iter().zip(&versions) {
            assert!(result.summary.is_consistent_with(original.len(), version.len()));
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let original = seq(&["A", "B", "C"]);
        let versions = sample_versions();
        assert_eq!(
            aggregate_parallel(&original, &versions),
            aggregate(&original, &versions)
        );
    }

    #[test]
    fn batches_keep_submission_order() {
        let original = seq(&["A", "B", "C"]);
        let mut versions = sample_versions();
        versions.extend(sample_versions());
        versions.push(seq(&["C"]));

        let expected = aggregate(&original, &versions);
        for workers in [1, 2, 3, 4, 16] {
            let batched = aggregate_in_batches(&original, &versions, workers);
            assert_eq!(batched, expected, "workers = {workers}");
        }
        let numbers: Vec<usize> = expected.iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn no_versions_gives_empty_run() {
        let run = build_run("a.rs", "T", &seq(&["x"]), &[], AggregateMode::Parallel);
        assert!(run.versions.is_empty());
        assert_eq!(run.original_file_name, "a.rs");
        assert_eq!(run.run_name, "T");
    }

    #[test]
    fn build_run_modes_agree() {
        let original = seq(&["A", "B", "C"]);
        let versions = sample_versions();
        let sequential = build_run("f", "r", &original, &versions, AggregateMode::Sequential);
        let parallel = build_run("f", "r", &original, &versions, AggregateMode::Parallel);
        assert_eq!(sequential, parallel);
    }
}
