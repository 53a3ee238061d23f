//! Report writing functionality

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::{Error, Result};
use crate::scanner::duplicate_detector::DuplicateInfo;
use crate::scanner::log_scanner::ScanStats;

/// Printed when no hash occurs more than once
pub const NO_DUPLICATES_NOTICE: &str = "No duplicate files found.";

const GROUP_SEPARATOR_WIDTH: usize = 20;

/// Output format for the duplicate report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a ScanStats,
    duplicates: &'a [DuplicateInfo],
}

/// Write the plain-text duplicate report
///
/// # Arguments
/// * `out` - Destination writer
/// * `duplicates` - Duplicate groups, in the order they should be listed
///
/// # Returns
/// Result indicating success or failure
pub fn write_report<W: Write>(out: &mut W, duplicates: &[DuplicateInfo]) -> Result<()> {
    write_text(out, duplicates).map_err(Error::Report)
}

fn write_text<W: Write>(out: &mut W, duplicates: &[DuplicateInfo]) -> std::io::Result<()> {
    if duplicates.is_empty() {
        return writeln!(out, "{}", NO_DUPLICATES_NOTICE);
    }

    for dup in duplicates {
        writeln!(out, "Duplicate files with hash: {}", dup.hash)?;
        for line in &dup.lines {
            writeln!(out, "- {}", line)?;
        }
        writeln!(out, "{}", "-".repeat(GROUP_SEPARATOR_WIDTH))?;
    }

    Ok(())
}

/// Write the duplicate report as pretty-printed JSON
pub fn write_json_report<W: Write>(
    out: &mut W,
    duplicates: &[DuplicateInfo],
    stats: &ScanStats,
) -> Result<()> {
    let report = JsonReport { stats, duplicates };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(Error::Report)
}

/// Write the report in the given format
pub fn write_formatted<W: Write>(
    out: &mut W,
    duplicates: &[DuplicateInfo],
    stats: &ScanStats,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_report(out, duplicates),
        ReportFormat::Json => write_json_report(out, duplicates, stats),
    }
}

/// Write the report to a file, replacing it if it exists
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `duplicates` - Duplicate groups to write
/// * `stats` - Scan statistics (JSON format only)
/// * `format` - Text or JSON
pub fn write_report_file(
    output_path: &Path,
    duplicates: &[DuplicateInfo],
    stats: &ScanStats,
    format: ReportFormat,
) -> Result<()> {
    let file = File::create(output_path).map_err(Error::Report)?;
    let mut writer = BufWriter::new(file);

    write_formatted(&mut writer, duplicates, stats, format)?;
    writer.flush().map_err(Error::Report)
}
