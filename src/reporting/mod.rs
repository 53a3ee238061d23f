//! Duplicate report rendering

pub mod report_writer;

pub use report_writer::{
    write_formatted, write_json_report, write_report, write_report_file, ReportFormat,
    NO_DUPLICATES_NOTICE,
};
