//! Line alignment engine for linemap.
//!
//! Computes a line-level correspondence between an original file and one or
//! more versions of it. Lines are compared by their normalized text, so
//! whitespace and inline comments do not affect the result.
//!
//! # Key Functions
//!
//! - [`normalize_line`] / [`normalize_text`] -- Derive comparison keys from raw text
//! - [`edit_script`] / [`align`] -- LCS alignment of two line sequences
//! - [`aggregate`] / [`aggregate_parallel`] / [`build_run`] -- One alignment per version, with summary counts

pub mod aggregate;
pub mod align;
pub mod normalize;

pub use aggregate::{aggregate, aggregate_parallel, build_run, AggregateMode};
pub use align::{align, edit_script};
pub use normalize::{normalize_line, normalize_text};
