//! Hash log scanning and duplicate detection

pub mod log_scanner;
pub mod duplicate_detector;
pub mod observer;

pub use log_scanner::{
    scan_file, scan_reader, scan_text, HashGroup, HashGroups, ScanOutcome, ScanStats,
};
pub use duplicate_detector::{find_duplicates, DuplicateInfo};
pub use observer::{NoTrace, PrintObserver, ScanObserver, TracingObserver};
