use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use walkdir::WalkDir;

use jsvet::output::{self, OutputFormat};
use jsvet::report::AnalysisResult;

#[derive(Parser)]
#[command(
    name = "jsvet",
    about = "Heuristic quality checks for JavaScript and eXBuilder6 source"
)]
struct Cli {
    /// File or directory to analyze.
    path: PathBuf,

    /// Output format: pretty, text, or json.
    #[arg(long, default_value = "pretty")]
    format: String,
}

/// One analyzed file, for JSON output of multi-file runs.
#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a Path,
    analysis: &'a AnalysisResult,
}

fn parse_format(s: &str) -> Result<OutputFormat> {
    match s {
        "pretty" => Ok(OutputFormat::Pretty),
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected pretty, text, or json)"),
    }
}

fn is_javascript(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "js" || ext == "mjs" || ext == "cjs")
}

fn collect_files(path: &PathBuf) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.clone()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let p = entry.path();
        if is_javascript(p) {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn format_result(result: &AnalysisResult, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => output::format_json(result),
        OutputFormat::Text => output::format_text(result),
        OutputFormat::Pretty => output::format_pretty(result),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let fmt = parse_format(&cli.format)?;

    let files = collect_files(&cli.path).context("failed to collect files")?;

    if files.is_empty() {
        anyhow::bail!("no JavaScript files found in {}", cli.path.display());
    }

    let results: Vec<AnalysisResult> = files
        .iter()
        .map(|f| jsvet::analyze_file(f))
        .collect::<std::io::Result<Vec<_>>>()
        .context("failed to analyze files")?;

    if fmt == OutputFormat::Json {
        if results.len() == 1 {
            println!("{}", format_result(&results[0], fmt));
        } else {
            let reports: Vec<FileReport<'_>> = files
                .iter()
                .zip(&results)
                .map(|(file, analysis)| FileReport {
                    file: file.as_path(),
                    analysis,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    } else {
        for (file, result) in files.iter().zip(&results) {
            if fmt == OutputFormat::Pretty {
                println!("{} {}", "File:".bold(), file.display());
            } else {
                println!("File: {}", file.display());
            }
            println!("{}", format_result(result, fmt));
        }
    }

    Ok(())
}
