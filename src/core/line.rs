//! Line classification for hash logs
//!
//! A hash log mixes decoration (blank lines, `Algorithm ...` headers,
//! `----` separators) with data lines shaped like
//! `SHA256  <64-char digest>  <path>`. Only the length of the second token
//! decides whether a line carries a hash; its characters are not checked.

/// Length, in characters, of a token accepted as a hash
pub const HASH_TOKEN_LEN: usize = 64;

/// Prefixes that mark a trimmed line as header or separator decoration
pub const DECORATION_PREFIXES: [&str; 2] = ["---", "Algorithm"];

/// A non-decoration line, trimmed and split into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub text: &'a str,
    pub tokens: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// The hash token, if the second token is exactly [`HASH_TOKEN_LEN`] characters
    pub fn hash_token(&self) -> Option<&'a str> {
        self.tokens
            .get(1)
            .copied()
            .filter(|token| token.chars().count() == HASH_TOKEN_LEN)
    }
}

/// Whitespace as used for trimming and tokenizing
///
/// Unicode `White_Space` plus the ASCII file/group/record/unit separators
/// (`\x1c`..=`\x1f`), which shell tooling also treats as field breaks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split text into lines at `\r\n`, `\n` or a bare `\r`
///
/// A trailing line break does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let line = &rest[..idx];
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Check whether an already-trimmed line is decoration
pub fn is_decoration(trimmed: &str) -> bool {
    trimmed.is_empty()
        || DECORATION_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
}

/// Trim and tokenize a raw line
///
/// # Returns
/// `None` for decoration lines, otherwise the trimmed text and its tokens
pub fn parse_line(raw: &str) -> Option<ParsedLine<'_>> {
    let text = raw.trim_matches(is_separator);
    if is_decoration(text) {
        return None;
    }

    Some(ParsedLine {
        text,
        tokens: text
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .collect(),
    })
}
