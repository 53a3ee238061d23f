//! Duplicate detection over scanned hash groups

use serde::Serialize;

use super::log_scanner::HashGroups;

/// A hash token seen on more than one log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateInfo {
    pub hash: String,
    pub lines: Vec<String>,
}

/// Find hash tokens that occur on two or more lines
///
/// # Arguments
/// * `groups` - Hash groups produced by a scan
///
/// # Returns
/// Duplicates in the order their hash was first seen, lines in file order
pub fn find_duplicates(groups: &HashGroups) -> Vec<DuplicateInfo> {
    groups
        .iter()
        .filter(|group| group.lines.len() > 1)
        .map(|group| DuplicateInfo {
            hash: group.hash.clone(),
            lines: group.lines.clone(),
        })
        .collect()
}
