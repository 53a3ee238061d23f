//! Error types for hash log scanning

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::encoding::TextEncoding;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode log file {} as {encoding}: {source}", path.display())]
    Decode {
        path: PathBuf,
        encoding: TextEncoding,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to write scan trace: {0}")]
    Trace(#[source] io::Error),

    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a byte buffer could not be decoded as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("odd number of bytes ({len}) for a 16-bit encoding")]
    OddLength { len: usize },

    #[error("unpaired surrogate 0x{unit:04X}")]
    UnpairedSurrogate { unit: u16 },

    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Result type alias using the library error.
pub type Result<T> = std::result::Result<T, Error>;
