use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linemap",
    about = "Track how source lines move, persist, disappear, and appear across file versions",
    version,
)]
pub struct Cli {
    /// Without a subcommand, `map` runs interactively.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// JSON output must stay parseable on stdout, so prompts move to stderr.
    pub fn prompts_on_stderr(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Map an original file's lines onto one or more versions and write XML
    Map(MapArgs),
    /// Print the normalized comparison keys of a file
    Normalize(NormalizeArgs),
}

#[derive(Args, Default)]
pub struct MapArgs {
    /// Original file
    #[arg(short, long)]
    pub original: Option<String>,
    /// Test name, written to NAME and used for the output file name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Version file to compare against the original (repeatable, in order)
    #[arg(short = 'f', long = "version-file")]
    pub version_files: Vec<String>,
    /// Directory the XML document is written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Align versions on separate threads
    #[arg(long)]
    pub parallel: bool,
    /// Reject files with more lines than this
    #[arg(long)]
    pub max_lines: Option<usize>,
    /// Prompt for any input not given on the command line
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args)]
pub struct NormalizeArgs {
    pub path: String,
    /// Prefix each line with its 1-based line number
    #[arg(long)]
    pub numbered: bool,
}
