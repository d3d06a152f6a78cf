//! Error types for the I/O crate.

use std::path::PathBuf;

/// Errors raised while reading inputs or writing the mapping document.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// An input file could not be opened or read.
    #[error("failed to open '{}' for reading: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be written.
    #[error("failed to write XML file '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
