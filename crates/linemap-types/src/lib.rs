//! Foundation types for linemap.
//!
//! This crate provides the data model shared by the aligner, the I/O layer,
//! and the command-line tool. Every other linemap crate depends on
//! `linemap-types`.
//!
//! # Key Types
//!
//! - [`NormalizedLine`] — Comparison key derived from a raw source line
//! - [`LineSequence`] — Ordered, 1-based sequence of normalized lines for one file
//! - [`EditOperation`] — Match / delete / insert step of an edit script
//! - [`LocationMapping`] — `(orig, new)` line pair using `-1` for an absent side
//! - [`VersionResult`] — Mappings and summary counts for one version file
//! - [`AlignmentRun`] — Top-level result handed to serialization

pub mod error;
pub mod line;
pub mod mapping;
pub mod run;

pub use error::TypeError;
pub use line::{LineSequence, NormalizedLine};
pub use mapping::{EditOperation, LocationMapping, MappingKind, ABSENT};
pub use run::{AlignmentRun, VersionResult, VersionSummary};
