//! Collecting the inputs of a mapping run, from flags or by prompting.

use std::io::{BufRead, Write};

use crate::cli::MapArgs;
use crate::error::InputError;

/// Validated inputs for one mapping run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapRequest {
    pub original: String,
    pub run_name: String,
    pub versions: Vec<String>,
}

/// Returns `true` if the flags alone do not describe a complete run.
pub fn needs_prompt(args: &MapArgs) -> bool {
    args.interactive || args.original.is_none() || args.version_files.is_empty()
}

fn run_name_or_default(name: &str, default_run_name: &str) -> String {
    if name.is_empty() {
        default_run_name.to_string()
    } else {
        name.to_string()
    }
}

fn checked_version_path(index: usize, path: &str) -> Result<String, InputError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(InputError::EmptyVersionPath { index });
    }
    Ok(path.to_string())
}

/// Build a request from command-line flags only.
pub fn request_from_args(args: &MapArgs, default_run_name: &str) -> Result<MapRequest, InputError> {
    let original = args.original.as_deref().map(str::trim).unwrap_or_default();
    if original.is_empty() {
        return Err(InputError::MissingOriginal);
    }
    if args.version_files.is_empty() {
        return Err(InputError::NoVersions);
    }

    let versions = args
        .version_files
        .iter()
        .enumerate()
        .map(|(idx, path)| checked_version_path(idx + 1, path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MapRequest {
        original: original.to_string(),
        run_name: run_name_or_default(args.name.as_deref().unwrap_or_default().trim(), default_run_name),
        versions,
    })
}

/// Line-oriented question and answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the trimmed answer.
    pub fn ask(&mut self, question: &str) -> Result<String, InputError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(InputError::EndOfInput(question.trim_end_matches([' ', ':']).to_string()));
        }
        Ok(answer.trim().to_string())
    }

    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask for every input the flags leave out, in the order: original file,
    /// test name, number of versions, then one path per version.
    pub fn collect(&mut self, args: &MapArgs, default_run_name: &str) -> Result<MapRequest, InputError> {
        let original = match &args.original {
            Some(path) => path.trim().to_string(),
            None => self.ask("Enter ORIGINAL file path: ")?,
        };
        if original.is_empty() {
            return Err(InputError::MissingOriginal);
        }

        let name = match &args.name {
            Some(name) => name.trim().to_string(),
            None => self.ask("Enter TEST name (e.g., TEST1): ")?,
        };
        let run_name = run_name_or_default(&name, default_run_name);

        let versions = if args.version_files.is_empty() {
            let raw = self.ask("Enter number of versions to compare: ")?;
            let count = match raw.parse::<usize>() {
                Ok(count) if count > 0 => count,
                _ => return Err(InputError::InvalidVersionCount(raw)),
            };

            let mut versions = Vec::with_capacity(count);
            for index in 1..=count {
                let path = self.ask(&format!("Enter path for VERSION {index}: "))?;
                versions.push(checked_version_path(index, &path)?);
            }
            versions
        } else {
            args.version_files
                .iter()
                .enumerate()
                .map(|(idx, path)| checked_version_path(idx + 1, path))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(MapRequest {
            original,
            run_name,
            versions,
        })
    }
}
