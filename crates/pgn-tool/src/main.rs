//! Check PGN files with the ingestion pipeline.
//!
//! Usage: pgn-check <path>... [--json]
//!
//! Each path is a PGN file or a directory (expanded with PGN_CHECK_GLOB,
//! default `*.pgn`). Exits 1 if any file fails to parse or none was found.

mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use pgn_ingest::{parse_with, ParseOptions, ShakmatyEngine, StrategyAttempt};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use config::{OutputFormat, ToolConfig};

fn collect_files(args: &[String], dir_glob: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        let path = Path::new(arg);
        if path.is_dir() {
            let pattern = format!("{}/{}", arg.trim_end_matches('/'), dir_glob);
            let mut found: Vec<_> = glob::glob(&pattern)
                .with_context(|| format!("invalid glob pattern {pattern}"))?
                .filter_map(|p| p.ok())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Parse one file and print the outcome. Returns whether it parsed.
fn check_file(path: &Path, output: OutputFormat) -> anyhow::Result<bool> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut log_attempt = |attempt: &StrategyAttempt| {
        tracing::debug!(
            file = %path.display(),
            strategy = attempt.strategy.name(),
            outcome = ?attempt.outcome,
            "strategy attempt"
        );
    };
    let parsed = parse_with(&ShakmatyEngine, &raw, &ParseOptions::default(), &mut log_attempt);

    match (output, &parsed) {
        (OutputFormat::Json, Ok(game)) => {
            let line = json!({ "file": path.display().to_string(), "game": game.to_record(&raw) });
            println!("{line}");
        }
        (OutputFormat::Json, Err(failure)) => {
            let line = json!({ "file": path.display().to_string(), "error": failure });
            println!("{line}");
        }
        (OutputFormat::Summary, Ok(game)) => {
            let meta = game.metadata();
            println!(
                "ok   {}: {} vs {} ({}), {} plies",
                path.display(),
                meta.white,
                meta.black,
                meta.result,
                game.ply_count()
            );
        }
        (OutputFormat::Summary, Err(failure)) => {
            println!("fail {}: {}: {}", path.display(), failure.kind, failure.message);
            if let Some(ref suggestion) = failure.suggestion {
                println!("     {suggestion}");
            }
            if let Some(ref details) = failure.details {
                tracing::info!(file = %path.display(), %details, "parse failure details");
            }
        }
    }

    Ok(parsed.is_ok())
}

fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut config = ToolConfig::from_env();

    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => config.output = OutputFormat::Json,
            _ => paths.push(arg),
        }
    }

    if paths.is_empty() {
        eprintln!("Usage: pgn-check <path>... [--json]");
        return Ok(ExitCode::FAILURE);
    }

    let files = collect_files(&paths, &config.dir_glob)?;
    if files.is_empty() {
        tracing::warn!("No PGN files found");
        return Ok(ExitCode::FAILURE);
    }

    let mut failed = 0usize;
    for file in &files {
        if !check_file(file, config.output)? {
            failed += 1;
        }
    }

    tracing::info!(files = files.len(), failed, "Done");

    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
