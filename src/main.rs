use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use hashlog_dupes::prelude::*;

/// Where the per-line scan trace goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TraceMode {
    /// Print `Line:`/`Parts:`/`Hash:` to stdout
    Print,
    /// Emit DEBUG log events (visible with --debug)
    Log,
    /// No trace
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "hashlog_dupes")]
#[command(about = "Report duplicate file content listed in a hash log", long_about = None)]
struct Cli {
    /// Hash log to scan (e.g. saved output of Get-FileHash)
    log_file: PathBuf,

    /// Text encoding of the log file (utf-16, utf-16le, utf-16be, utf-8)
    #[arg(short, long, default_value_t = TextEncoding::Utf16)]
    encoding: TextEncoding,

    /// Per-line scan trace
    #[arg(short, long, value_enum, default_value_t = TraceMode::Print)]
    trace: TraceMode,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();

    let outcome = match cli.trace {
        TraceMode::Print => {
            let mut observer = PrintObserver::new(stdout.lock());
            scan_file(&cli.log_file, cli.encoding, &mut observer)
        }
        TraceMode::Log => scan_file(&cli.log_file, cli.encoding, &mut TracingObserver),
        TraceMode::Off => scan_file(&cli.log_file, cli.encoding, &mut NoTrace),
    }
    .with_context(|| format!("Failed to scan {}", cli.log_file.display()))?;

    let duplicates = find_duplicates(&outcome.groups);
    tracing::debug!(groups = duplicates.len(), "Duplicate detection complete");

    match &cli.output {
        Some(path) => {
            write_report_file(path, &duplicates, &outcome.stats, cli.format.into())
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => {
            let mut out = stdout.lock();
            write_formatted(&mut out, &duplicates, &outcome.stats, cli.format.into())?;
            out.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
