use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use linemap_diff::build_run;
use linemap_io::{file_base_name, read_normalized_lines, write_document};
use linemap_types::{AlignmentRun, LineSequence, VersionSummary};
use serde::Serialize;
use tracing::info;

use crate::cli::*;
use crate::config::LinemapConfig;
use crate::error::InputError;
use crate::prompt::{needs_prompt, request_from_args, MapRequest, Prompter};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => LinemapConfig::load(path)?,
        None => LinemapConfig::default(),
    };

    match cli.command {
        Some(Command::Map(args)) => cmd_map(args, config, &cli.format),
        Some(Command::Normalize(args)) => cmd_normalize(args, &cli.format),
        None => cmd_map(MapArgs { interactive: true, ..Default::default() }, config, &cli.format),
    }
}

/// Per-version counts as reported to the user.
#[derive(Debug, Serialize)]
struct VersionReport {
    number: usize,
    #[serde(flatten)]
    summary: VersionSummary,
}

#[derive(Debug, Serialize)]
struct MapReport {
    test: String,
    file: String,
    output: PathBuf,
    versions: Vec<VersionReport>,
}

impl MapReport {
    fn new(run: &AlignmentRun, output: PathBuf) -> Self {
        Self {
            test: run.run_name.clone(),
            file: run.original_file_name.clone(),
            output,
            versions: run
                .summaries()
                .map(|(number, summary)| VersionReport { number, summary })
                .collect(),
        }
    }
}

fn cmd_map(args: MapArgs, config: LinemapConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let config = config.with_args(&args);

    let request = if needs_prompt(&args) {
        let stdin = io::stdin();
        let prompt_out: Box<dyn Write> = if format.prompts_on_stderr() {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        let mut prompter = Prompter::new(stdin.lock(), prompt_out);
        prompter.say("=== linemap: XML Line Mapping Tool ===")?;
        prompter.collect(&args, &config.default_run_name)?
    } else {
        request_from_args(&args, &config.default_run_name)?
    };

    let (run, output) = execute_map(&request, &config)?;
    let report = MapReport::new(&run, output);

    match format {
        OutputFormat::Text => write_text_report(&mut io::stdout().lock(), &report)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn write_text_report<W: Write>(out: &mut W, report: &MapReport) -> io::Result<()> {
    for version in &report.versions {
        let s = version.summary;
        writeln!(
            out,
            "VERSION {}: {} line(s) matched, {} line(s) removed, {} line(s) added.",
            version.number,
            s.matched.to_string().green(),
            s.removed.to_string().red(),
            s.added.to_string().cyan(),
        )?;
    }
    writeln!(
        out,
        "{} XML mappings written to {}",
        "✓".green().bold(),
        report.output.display().to_string().bold()
    )
}

fn read_checked(path: &str, max_lines: Option<usize>) -> anyhow::Result<LineSequence> {
    let lines = read_normalized_lines(path)?;
    if let Some(limit) = max_lines {
        if lines.len() > limit {
            return Err(InputError::TooManyLines {
                path: PathBuf::from(path),
                lines: lines.len(),
                limit,
            }
            .into());
        }
    }
    Ok(lines)
}

/// Read every input, align, and write the document.
///
/// All files are read before anything is aligned or written, so a missing or
/// oversized version leaves no output behind.
fn execute_map(request: &MapRequest, config: &LinemapConfig) -> anyhow::Result<(AlignmentRun, PathBuf)> {
    let original = read_checked(&request.original, config.max_lines)?;
    let versions = request
        .versions
        .iter()
        .map(|path| read_checked(path, config.max_lines))
        .collect::<anyhow::Result<Vec<_>>>()?;

    info!(
        original = %request.original,
        versions = versions.len(),
        mode = ?config.aggregate_mode(),
        "aligning"
    );
    let run = build_run(
        file_base_name(&request.original),
        request.run_name.as_str(),
        &original,
        &versions,
        config.aggregate_mode(),
    );

    let output = write_document(&run, &config.out_dir)
        .with_context(|| format!("mapping results for '{}' were not saved", request.run_name))?;
    Ok((run, output))
}

fn cmd_normalize(args: NormalizeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let lines = read_normalized_lines(Path::new(&args.path))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for (idx, line) in lines.iter().enumerate() {
                if args.numbered {
                    writeln!(out, "{:>5}  {}", idx + 1, line)?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn config_in(dir: &Path) -> LinemapConfig {
        LinemapConfig {
            out_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn maps_and_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "Base.java", "A\nB // gone soon\nC\n"),
            run_name: "Test/One:2".into(),
            versions: vec![write(dir.path(), "v1.java", "A\nC /* kept */\nD\n")],
        };

        let (run, output) = execute_map(&request, &config_in(dir.path())).unwrap();
        assert_eq!(output, dir.path().join("Test_One_2.xml"));
        assert_eq!(run.original_file_name, "Base.java");

        let s = run.versions[0].summary;
        assert_eq!((s.matched, s.removed, s.added), (2, 1, 1));

        let doc = std::fs::read_to_string(&output).unwrap();
        assert!(doc.contains(r#"<TEST NAME="Test/One:2" FILE="Base.java">"#));
        assert!(doc.contains(r#"<LOCATION ORIG="2" NEW="-1"/>"#));
        assert!(doc.contains(r#"<LOCATION ORIG="-1" NEW="3"/>"#));
    }

    #[test]
    fn unreadable_version_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "a.c", "x\n"),
            run_name: "RUN".into(),
            versions: vec![
                write(dir.path(), "b.c", "x\n"),
                dir.path().join("missing.c").to_string_lossy().into_owned(),
            ],
        };

        let err = execute_map(&request, &config_in(dir.path())).unwrap_err();
        assert!(err.to_string().contains("missing.c"));
        assert!(!dir.path().join("RUN.xml").exists());
    }

    #[test]
    fn line_ceiling_rejects_large_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "a.c", "1\n2\n3\n"),
            run_name: "RUN".into(),
            versions: vec![write(dir.path(), "b.c", "1\n")],
        };
        let config = LinemapConfig {
            max_lines: Some(2),
            ..config_in(dir.path())
        };

        let err = execute_map(&request, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::TooManyLines { lines: 3, limit: 2, .. })
        ));
        assert!(!dir.path().join("RUN.xml").exists());
    }

    #[test]
    fn parallel_run_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "a.c", "a\nb\nc\nd\n"),
            run_name: "RUN".into(),
            versions: vec![
                write(dir.path(), "v1.c", "a\nc\nd\ne\n"),
                write(dir.path(), "v2.c", "d\nc\nb\na\n"),
                write(dir.path(), "v3.c", ""),
            ],
        };

        let (sequential, _) = execute_map(&request, &config_in(dir.path())).unwrap();
        let parallel_config = LinemapConfig {
            parallel: true,
            ..config_in(dir.path())
        };
        let (parallel, _) = execute_map(&request, &parallel_config).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn report_lists_versions_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "a.c", "a\n"),
            run_name: "RUN".into(),
            versions: vec![
                write(dir.path(), "v1.c", "a\n"),
                write(dir.path(), "v2.c", "b\n"),
            ],
        };
        let (run, output) = execute_map(&request, &config_in(dir.path())).unwrap();

        let json = serde_json::to_value(MapReport::new(&run, output)).unwrap();
        assert_eq!(json["versions"][0]["number"], 1);
        assert_eq!(json["versions"][0]["matched"], 1);
        assert_eq!(json["versions"][1]["removed"], 1);
        assert_eq!(json["versions"][1]["added"], 1);
        assert_eq!(json["file"], "a.c");
    }

    #[test]
    fn text_report_has_one_line_per_version() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let request = MapRequest {
            original: write(dir.path(), "a.c", "A\nB\nC\n"),
            run_name: "RUN".into(),
            versions: vec![
                write(dir.path(), "v1.c", "A\nC\nD\n"),
                write(dir.path(), "v2.c", ""),
            ],
        };
        let (run, output) = execute_map(&request, &config_in(dir.path())).unwrap();

        let mut buf = Vec::new();
        write_text_report(&mut buf, &MapReport::new(&run, output.clone())).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "VERSION 1: 2 line(s) matched, 1 line(s) removed, 1 line(s) added."
        );
        assert_eq!(
            lines[1],
            "VERSION 2: 0 line(s) matched, 3 line(s) removed, 0 line(s) added."
        );
        assert!(lines[2].ends_with(&format!("XML mappings written to {}", output.display())));
    }
}
