//! Run-name sanitization and output file naming.
//!
//! The run name is written verbatim into the document's `NAME` attribute, but
//! the output file name uses a sanitized form:
//! - Alphanumeric characters, `-` and `_` are kept
//! - Every other character becomes `_`
//! - An empty result falls back to [`DEFAULT_RUN_NAME`]

use std::path::Path;

/// Run name used when none is given or nothing survives sanitization.
pub const DEFAULT_RUN_NAME: &str = "TEST";

/// Extension of the output document.
const OUTPUT_EXTENSION: &str = "xml";

/// Make a run name safe to use as a file stem.
///
/// # Examples
///
/// ```
/// use linemap_io::naming::sanitize_run_name;
///
/// assert_eq!(sanitize_run_name("Test/One:2"), "Test_One_2");
/// assert_eq!(sanitize_run_name(""), "TEST");
/// ```
pub fn sanitize_run_name(run_name: &str) -> String {
    let sanitized: String = run_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        DEFAULT_RUN_NAME.to_string()
    } else {
        sanitized
    }
}

/// File name of the document written for `run_name`.
pub fn output_file_name(run_name: &str) -> String {
    format!("{}.{OUTPUT_EXTENSION}", sanitize_run_name(run_name))
}

/// Final component of `path`, used for the document's `FILE` attribute.
///
/// Paths without a final component (such as `..`) are returned whole.
pub fn file_base_name(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}
