//! Per-line trace sinks for the log scanner

use std::io::{self, Write};

use crate::core::line::ParsedLine;

/// Receives every non-decoration line seen during a scan
pub trait ScanObserver {
    fn on_line(&mut self, line: &ParsedLine<'_>) -> io::Result<()>;
}

/// Prints `Line:`, `Parts:` and `Hash:` trace lines to a writer
pub struct PrintObserver<W: Write> {
    out: W,
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanObserver for PrintObserver<W> {
    fn on_line(&mut self, line: &ParsedLine<'_>) -> io::Result<()> {
        writeln!(self.out, "Line: {}", line.text)?;
        writeln!(self.out, "Parts: {}", token_list(&line.tokens))?;
        if let Some(hash) = line.hash_token() {
            writeln!(self.out, "Hash: {}", hash)?;
        }
        Ok(())
    }
}

/// Render tokens as a bracketed list of single-quoted strings, `['a', 'b']`
///
/// Tokens holding a `'` but no `"` are double-quoted instead; backslashes,
/// the active quote and control characters are escaped.
fn token_list(tokens: &[&str]) -> String {
    let items: Vec<String> = tokens.iter().map(|token| quote_token(token)).collect();
    format!("[{}]", items.join(", "))
}

fn quote_token(token: &str) -> String {
    let quote = if token.contains('\'') && !token.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(token.len() + 2);
    out.push(quote);
    for c in token.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x100 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else {
                    out.push_str(&format!("\\u{:04x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Emits each traced line as a `tracing` DEBUG event
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_line(&mut self, line: &ParsedLine<'_>) -> io::Result<()> {
        match line.hash_token() {
            Some(hash) => {
                tracing::debug!(line = line.text, tokens = line.tokens.len(), hash, "hash line")
            }
            None => {
                tracing::debug!(line = line.text, tokens = line.tokens.len(), "ignored line")
            }
        }
        Ok(())
    }
}

/// Discards the trace
#[derive(Debug, Default)]
pub struct NoTrace;

impl ScanObserver for NoTrace {
    fn on_line(&mut self, _line: &ParsedLine<'_>) -> io::Result<()> {
        Ok(())
    }
}
