//! File input and XML output for linemap.
//!
//! The alignment engine never touches the filesystem. This crate reads version
//! files into normalized [`LineSequence`](linemap_types::LineSequence)s and
//! writes a finished [`AlignmentRun`](linemap_types::AlignmentRun) as an XML
//! mapping document.
//!
//! # Key Functions
//!
//! - [`read_normalized_lines`] -- Read and normalize one file
//! - [`sanitize_run_name`] / [`output_file_name`] -- Derive the output file name
//! - [`render_document`] / [`write_document`] -- Serialize a run as XML

pub mod error;
pub mod naming;
pub mod source;
pub mod xml;

pub use error::{IoError, IoResult};
pub use naming::{file_base_name, output_file_name, sanitize_run_name, DEFAULT_RUN_NAME};
pub use source::read_normalized_lines;
pub use xml::{render_document, write_document};
