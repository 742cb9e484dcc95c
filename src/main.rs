//! scanstat — summarise a directory tree from the command line.
//!
//! Thin binary entry point. All scanning, aggregation and rendering lives
//! in `scanstat-core`; this file parses arguments, drives a background scan
//! and writes the chosen rendering.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scanstat_core::export;
use scanstat_core::model::size::format_count;
use scanstat_core::scanner::progress::ScanProgress;
use scanstat_core::{start_scan, Report, ScanOptions};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "scanstat",
    version,
    about = "Summarise file counts, sizes, biggest files and common extensions"
)]
struct Cli {
    /// Directory to scan
    path: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Write the report to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Number of largest files to list
    #[arg(long, default_value_t = scanstat_core::analysis::MAX_TOP_FILES)]
    top_files: usize,
    /// Number of most frequent extensions to list
    #[arg(long, default_value_t = scanstat_core::analysis::MAX_TOP_EXTENSIONS)]
    top_extensions: usize,
    /// Skip dot-files and dot-directories
    #[arg(long)]
    skip_hidden: bool,
    /// Cancel the scan after this many seconds and report partial results
    #[arg(long)]
    timeout: Option<u64>,
    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Html,
    Json,
    Csv,
}

/// How long to wait on the progress channel before re-checking the deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let options = ScanOptions {
        top_files: cli.top_files,
        top_extensions: cli.top_extensions,
        skip_hidden: cli.skip_hidden,
        ..ScanOptions::default()
    };

    let handle = start_scan(cli.path.clone(), options)
        .with_context(|| format!("cannot scan {}", cli.path.display()))?;
    let deadline = cli.timeout.map(|secs| Instant::now() + Duration::from_secs(secs));

    // Drain until the scan thread has exited and every queued message is logged.
    while !(handle.is_finished() && handle.progress_rx.is_empty()) {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline && !handle.is_cancelled() {
                tracing::warn!("Timeout reached, cancelling scan");
                handle.cancel();
            }
        }
        match handle.progress_rx.recv_timeout(POLL_INTERVAL) {
            Ok(ScanProgress::Update { files_found, .. }) => {
                tracing::info!("Scanned {} files", format_count(files_found));
            }
            Ok(ScanProgress::Complete {
                duration,
                error_count,
            }) => {
                tracing::info!("Scan completed in {duration:?} ({error_count} entries skipped)");
            }
            Ok(ScanProgress::Cancelled { files_found }) => {
                tracing::info!("Scan cancelled after {} files", format_count(files_found));
            }
            Ok(ScanProgress::Error { .. }) | Err(_) => {}
        }
    }

    let outcome = handle.join().context("scan failed")?;
    let rendered = render(&outcome.report, cli.format)?;

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render(report: &Report, format: Format) -> Result<String> {
    Ok(match format {
        Format::Table => export::render_table(report),
        Format::Html => export::render_html(report),
        Format::Json => {
            let mut json = export::to_json(report)?;
            json.push('\n');
            json
        }
        Format::Csv => {
            let mut buf = Vec::new();
            export::write_csv(report, &mut buf)?;
            String::from_utf8(buf).context("CSV output was not UTF-8")?
        }
    })
}
