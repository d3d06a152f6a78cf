use std::path::PathBuf;

use thiserror::Error;

/// Problems with what the user asked for. Raised before any alignment runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("ORIGINAL file path is required")]
    MissingOriginal,

    #[error("number of versions must be a positive integer (got '{0}')")]
    InvalidVersionCount(String),

    #[error("empty path is not allowed (VERSION {index})")]
    EmptyVersionPath { index: usize },

    #[error("at least one version file is required")]
    NoVersions,

    #[error("'{}' has {} lines, over the limit of {}", .path.display(), .lines, .limit)]
    TooManyLines {
        path: PathBuf,
        lines: usize,
        limit: usize,
    },

    #[error("input ended while waiting for: {0}")]
    EndOfInput(String),

    #[error("failed to read input: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
