//! Decoding, line classification and error types

pub mod encoding;
pub mod error;
pub mod line;

pub use encoding::TextEncoding;
pub use error::{DecodeError, Error, Result};
pub use line::{parse_line, ParsedLine, HASH_TOKEN_LEN};
