//! Hash Log Duplicate Finder Library
//!
//! Scans a text log of file hashes and groups the lines that share a digest,
//! so repeated file content can be reported.

pub mod core;
pub mod scanner;
pub mod reporting;

pub use crate::core::error::{Error, Result};
pub use scanner::log_scanner;
pub use reporting::report_writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::encoding::TextEncoding;
    pub use crate::core::error::{DecodeError, Error, Result};
    pub use crate::core::line::{parse_line, ParsedLine, HASH_TOKEN_LEN};
    pub use crate::scanner::log_scanner::{
        scan_file, scan_reader, scan_text, HashGroup, HashGroups, ScanOutcome, ScanStats,
    };
    pub use crate::scanner::duplicate_detector::{find_duplicates, DuplicateInfo};
    pub use crate::scanner::observer::{NoTrace, PrintObserver, ScanObserver, TracingObserver};
    pub use crate::reporting::report_writer::{
        write_formatted, write_json_report, write_report, write_report_file, ReportFormat,
        NO_DUPLICATES_NOTICE,
    };
}
