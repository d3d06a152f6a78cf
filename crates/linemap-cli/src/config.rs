use std::path::{Path, PathBuf};

use linemap_diff::AggregateMode;
use linemap_io::DEFAULT_RUN_NAME;
use serde::{Deserialize, Serialize};

use crate::cli::MapArgs;
use crate::error::ConfigError;

/// Settings for a mapping run. Loaded from TOML; command-line flags win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinemapConfig {
    /// Directory the XML document is written to.
    pub out_dir: PathBuf,
    /// Align versions on separate threads.
    pub parallel: bool,
    /// Largest accepted line count for any input file. Alignment cost grows
    /// with the product of the two files' line counts.
    pub max_lines: Option<usize>,
    /// Run name used when the user leaves it blank.
    pub default_run_name: String,
}

impl Default for LinemapConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            parallel: false,
            max_lines: None,
            default_run_name: DEFAULT_RUN_NAME.to_string(),
        }
    }
}

impl LinemapConfig {
    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &MapArgs) -> Self {
        if let Some(dir) = &args.out_dir {
            self.out_dir = dir.clone();
        }
        if args.parallel {
            self.parallel = true;
        }
        if args.max_lines.is_some() {
            self.max_lines = args.max_lines;
        }
        self
    }

    pub fn aggregate_mode(&self) -> AggregateMode {
        if self.parallel {
            AggregateMode::Parallel
        } else {
            AggregateMode::Sequential
        }
    }
}
