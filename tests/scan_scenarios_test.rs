//! Integration tests for end-to-end hash log scanning
//!
//! Builds hash logs the way `Get-FileHash | Format-Table` writes them
//! (UTF-16LE with BOM, CRLF) and checks the grouping and the report.

use hashlog_dupes::prelude::*;
use sha2::{Digest, Sha256};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

/// Hex SHA-256 of some content, as a hash log would list it
fn sha256_hex(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Write `lines` as a UTF-16LE log with BOM and CRLF line endings
fn create_utf16_log(lines: &[String]) -> NamedTempFile {
    let text: String = lines.iter().map(|l| format!("{}\r\n", l)).collect();
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(&bytes).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Scan a log and render the text report, returning (trace, report)
fn run(path: &Path) -> hashlog_dupes::Result<(String, String)> {
    let mut observer = PrintObserver::new(Vec::new());
    let outcome = scan_file(path, TextEncoding::Utf16, &mut observer)?;

    let mut report = Vec::new();
    write_report(&mut report, &find_duplicates(&outcome.groups))?;

    Ok((
        String::from_utf8(observer.into_inner()).unwrap(),
        String::from_utf8(report).unwrap(),
    ))
}

fn header() -> Vec<String> {
    vec![
        String::new(),
        "Algorithm       Hash                                                                   Path".to_string(),
        "---------       ----                                                                   ----".to_string(),
    ]
}

/// Two lines sharing a 64-char token give one duplicate block with both lines
#[test]
fn test_two_identical_hashes_reported() {
    let hash = "a".repeat(64);
    let log = create_utf16_log(&[
        format!("1 {} file1.txt", hash),
        format!("2 {} file2.txt", hash),
    ]);

    let (_, report) = run(log.path()).unwrap();

    assert_eq!(
        report,
        format!(
            "Duplicate files with hash: {h}\n- 1 {h} file1.txt\n- 2 {h} file2.txt\n--------------------\n",
            h = hash
        )
    );
}

/// Header, separator and blank lines alone never produce a group
#[test]
fn test_header_only_log_has_no_duplicates() {
    let mut lines = header();
    lines.push(String::new());
    lines.push("   ".to_string());
    let log = create_utf16_log(&lines);

    let (trace, report) = run(log.path()).unwrap();

    assert_eq!(report, "No duplicate files found.\n");
    assert!(trace.is_empty(), "Decoration lines must not be traced");
}

/// A 63-character second token is ignored without error
#[test]
fn test_short_token_is_ignored() {
    let log = create_utf16_log(&[format!("SHA256 {} C:\\a.txt", "b".repeat(63))]);

    let (trace, report) = run(log.path()).unwrap();

    assert_eq!(report, "No duplicate files found.\n");
    assert!(trace.contains("Line: SHA256"));
    assert!(!trace.contains("Hash: "));
}

/// A missing log is a file-access error and nothing is reported
#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("hashes_full.log");

    let err = run(&missing).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("hashes_full.log"));
}

/// Realistic log: only repeated digests are reported, each with all its lines in order
#[test]
fn test_mixed_log_groups_in_file_order() {
    let photo = sha256_hex(b"holiday photo");
    let notes = sha256_hex(b"meeting notes");
    let unique = sha256_hex(b"only once");

    let mut lines = header();
    lines.extend([
        format!("SHA256          {}       C:\\Users\\me\\Pictures\\beach.jpg", photo),
        format!("SHA256          {}       C:\\Users\\me\\Documents\\notes.txt", notes),
        format!("SHA256          {}       C:\\Users\\me\\Desktop\\single.bin", unique),
        format!("SHA256          {}       C:\\Backup\\beach.jpg", photo),
        format!("SHA256          {}       C:\\Backup\\notes.txt", notes),
        format!("SHA256          {}       C:\\Old\\beach (1).jpg", photo),
        String::new(),
    ]);
    let log = create_utf16_log(&lines);

    let mut observer = NoTrace;
    let outcome = scan_file(log.path(), TextEncoding::Utf16, &mut observer).unwrap();
    let duplicates = find_duplicates(&outcome.groups);

    assert_eq!(duplicates.len(), 2);
    assert_eq!(duplicates[0].hash, photo);
    assert_eq!(
        duplicates[0].lines,
        vec![
            format!("SHA256          {}       C:\\Users\\me\\Pictures\\beach.jpg", photo),
            format!("SHA256          {}       C:\\Backup\\beach.jpg", photo),
            format!("SHA256          {}       C:\\Old\\beach (1).jpg", photo),
        ]
    );
    assert_eq!(duplicates[1].hash, notes);
    assert_eq!(duplicates[1].lines.len(), 2);
    assert!(duplicates.iter().all(|d| d.hash != unique));

    assert_eq!(outcome.stats.hash_lines, 6);
    assert_eq!(outcome.stats.ignored_lines, 0);
}

/// Hash-looking tokens outside the second position never qualify a line
#[test]
fn test_hash_in_wrong_position_is_excluded() {
    let hash = sha256_hex(b"payload");
    let log = create_utf16_log(&[
        format!("{} first.txt", hash),
        format!("{} second.txt", hash),
        format!("SHA256 path.txt {}", hash),
        hash.clone(),
    ]);

    let (trace, report) = run(log.path()).unwrap();

    assert_eq!(report, "No duplicate files found.\n");
    assert_eq!(trace.matches("Line: ").count(), 4);
    assert!(!trace.contains("Hash: "));
}

/// Decoration prefixes win even when the line would otherwise qualify
#[test]
fn test_decoration_lines_never_group() {
    let hash = sha256_hex(b"x");
    let log = create_utf16_log(&[
        format!("Algorithm {} a", hash),
        format!("--- {} b", hash),
        format!("SHA256 {} c", hash),
    ]);

    let outcome = scan_file(log.path(), TextEncoding::Utf16, &mut NoTrace).unwrap();

    assert_eq!(outcome.groups.get(&hash).unwrap(), &[format!("SHA256 {} c", hash)]);
    assert!(find_duplicates(&outcome.groups).is_empty());
}

/// Old Mac line endings and ASCII unit separators still split lines and tokens
#[test]
fn test_cr_only_log_with_unit_separators() {
    let hash = sha256_hex(b"classic");
    let text = format!("1\x1f{h} a.txt\r2 {h} b.txt\r", h = hash);
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));
    let mut log = NamedTempFile::new().unwrap();
    log.write_all(&bytes).unwrap();
    log.flush().unwrap();

    let (_, report) = run(log.path()).unwrap();

    assert_eq!(
        report,
        format!(
            "Duplicate files with hash: {h}\n- 1\x1f{h} a.txt\n- 2 {h} b.txt\n--------------------\n",
            h = hash
        )
    );
}

/// Trace lines come out in the documented format
#[test]
fn test_trace_output_format() {
    let hash = sha256_hex(b"traced");
    let log = create_utf16_log(&[format!("SHA256 {} C:\\t.txt", hash)]);

    let (trace, _) = run(log.path()).unwrap();

    assert_eq!(
        trace,
        format!(
            "Line: SHA256 {h} C:\\t.txt\nParts: ['SHA256', '{h}', 'C:\\\\t.txt']\nHash: {h}\n",
            h = hash
        )
    );
}

/// The report can be written to a file in JSON form
#[test]
fn test_json_report_file() {
    let hash = sha256_hex(b"same");
    let log = create_utf16_log(&[format!("1 {} a", hash), format!("2 {} b", hash)]);
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let outcome = scan_file(log.path(), TextEncoding::Utf16, &mut NoTrace).unwrap();
    write_report_file(
        &report_path,
        &find_duplicates(&outcome.groups),
        &outcome.stats,
        ReportFormat::Json,
    )
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["stats"]["total_lines"], 2);
    assert_eq!(value["duplicates"][0]["hash"], hash);
    assert_eq!(value["duplicates"][0]["lines"][1], format!("2 {} b", hash));
}
