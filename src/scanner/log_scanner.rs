//! Single-pass hash log scanner

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::observer::ScanObserver;
use crate::core::encoding::TextEncoding;
use crate::core::error::{Error, Result};
use crate::core::line::{parse_line, split_lines};

/// All lines that produced one hash token, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    pub hash: String,
    pub lines: Vec<String>,
}

/// Insertion-ordered multi-map from hash token to lines
#[derive(Debug, Default)]
pub struct HashGroups {
    index: HashMap<String, usize>,
    groups: Vec<HashGroup>,
}

impl HashGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the group for `hash`, creating the group on first sight
    pub fn insert(&mut self, hash: &str, line: &str) {
        let idx = match self.index.get(hash) {
            Some(&idx) => idx,
            None => {
                self.groups.push(HashGroup {
                    hash: hash.to_string(),
                    lines: Vec::new(),
                });
                self.index.insert(hash.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[idx].lines.push(line.to_string());
    }

    pub fn get(&self, hash: &str) -> Option<&[String]> {
        self.index
            .get(hash)
            .map(|&idx| self.groups[idx].lines.as_slice())
    }

    /// Number of distinct hash tokens
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in the order their hash was first seen
    pub fn iter(&self) -> impl Iterator<Item = &HashGroup> {
        self.groups.iter()
    }
}

/// Line counts gathered during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub total_lines: usize,
    pub decoration_lines: usize,
    pub hash_lines: usize,
    pub ignored_lines: usize,
}

/// Result of scanning one log
#[derive(Debug)]
pub struct ScanOutcome {
    pub groups: HashGroups,
    pub stats: ScanStats,
}

/// Group the lines of already-decoded log text by hash token
///
/// # Arguments
/// * `text` - Decoded log contents
/// * `observer` - Receives every non-decoration line
///
/// # Returns
/// The hash groups and line counts; fails only if the observer fails
pub fn scan_text(text: &str, observer: &mut dyn ScanObserver) -> Result<ScanOutcome> {
    let mut groups = HashGroups::new();
    let mut stats = ScanStats::default();

    for raw in split_lines(text) {
        stats.total_lines += 1;

        let Some(line) = parse_line(raw) else {
            stats.decoration_lines += 1;
            continue;
        };

        observer.on_line(&line).map_err(Error::Trace)?;

        match line.hash_token() {
            Some(hash) => {
                groups.insert(hash, line.text);
                stats.hash_lines += 1;
            }
            None => stats.ignored_lines += 1,
        }
    }

    Ok(ScanOutcome { groups, stats })
}

/// Read, decode and scan a log from any reader
///
/// `path` is only used to label errors.
pub fn scan_reader<R: Read>(
    mut reader: R,
    path: &Path,
    encoding: TextEncoding,
    observer: &mut dyn ScanObserver,
) -> Result<ScanOutcome> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = encoding.decode(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        encoding,
        source,
    })?;

    scan_text(&text, observer)
}

/// Scan a hash log file
///
/// # Arguments
/// * `path` - Log file to read
/// * `encoding` - How the file's bytes are decoded
/// * `observer` - Receives every non-decoration line
///
/// # Returns
/// The hash groups and line counts, or a file-access error
pub fn scan_file(
    path: &Path,
    encoding: TextEncoding,
    observer: &mut dyn ScanObserver,
) -> Result<ScanOutcome> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = scan_reader(file, path, encoding, observer)?;

    tracing::info!(
        path = %path.display(),
        %encoding,
        total = outcome.stats.total_lines,
        hashed = outcome.stats.hash_lines,
        ignored = outcome.stats.ignored_lines,
        distinct = outcome.groups.len(),
        "Scanned hash log"
    );

    Ok(outcome)
}
