//! Text decoding for hash logs
//!
//! Hash logs written by Windows shells are usually UTF-16 with a BOM, so
//! that is the default. Decoding is strict: bytes that don't fit the chosen
//! encoding are an error rather than being replaced.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::DecodeError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Encoding used to turn the raw log bytes into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-16 with byte order taken from the BOM (little-endian without one)
    #[default]
    Utf16,
    /// UTF-16 little-endian, no BOM handling
    Utf16Le,
    /// UTF-16 big-endian, no BOM handling
    Utf16Be,
    /// UTF-8, leading BOM stripped
    Utf8,
}

impl TextEncoding {
    /// All supported encodings, in CLI listing order
    pub const ALL: [TextEncoding; 4] = [
        TextEncoding::Utf16,
        TextEncoding::Utf16Le,
        TextEncoding::Utf16Be,
        TextEncoding::Utf8,
    ];

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Utf8 => "utf-8",
        }
    }

    /// Decode a complete buffer into a `String`
    ///
    /// # Arguments
    /// * `bytes` - Raw file contents
    ///
    /// # Returns
    /// The decoded text, or the first decoding problem found
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextEncoding::Utf16 => {
                if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
                    decode_utf16(rest, true)
                } else {
                    let rest = bytes.strip_prefix(UTF16_LE_BOM).unwrap_or(bytes);
                    decode_utf16(rest, false)
                }
            }
            TextEncoding::Utf16Le => decode_utf16(bytes, false),
            TextEncoding::Utf16Be => decode_utf16(bytes, true),
            TextEncoding::Utf8 => {
                let rest = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(rest)
                    .map(str::to_owned)
                    .map_err(|e| DecodeError::InvalidUtf8 {
                        offset: e.valid_up_to() + (bytes.len() - rest.len()),
                    })
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> Result<String, DecodeError> {
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength { len: bytes.len() });
    }

    let units = bytes.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .map(|c| {
            c.map_err(|e| DecodeError::UnpairedSurrogate {
                unit: e.unpaired_surrogate(),
            })
        })
        .collect()
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        TextEncoding::ALL
            .into_iter()
            .find(|enc| enc.name() == wanted || enc.name().replace('-', "") == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = TextEncoding::ALL.iter().map(|e| e.name()).collect();
                format!("unknown encoding '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
