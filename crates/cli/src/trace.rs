//! Text trace reader.
//!
//! A trace is a sequence of resolved branches, one per line. Two record shapes
//! are accepted:
//! 1. **Short:** `<pc> <outcome>`, a conditional direct branch.
//! 2. **Full:** `<pc> <target> <outcome> <conditional> <call> <return> <direct>`.
//!
//! Addresses accept `0x` hex or decimal; the outcome and flags are `0` or `1`.
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;

use bpsim_core::{Branch, Direction};
use thiserror::Error;

/// Errors raised while reading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A record had neither 2 nor 7 fields.
    #[error("line {line}: expected 2 or 7 fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },

    /// An address field was not a valid 32-bit number.
    #[error("line {line}: invalid {field} `{value}`")]
    Address {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Offending text.
        value: String,
    },

    /// An outcome or flag field was not `0` or `1`.
    #[error("line {line}: {field} must be 0 or 1, got `{value}`")]
    Flag {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Offending text.
        value: String,
    },
}

/// One resolved branch from the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Branch descriptor passed to the engine.
    pub branch: Branch,
    /// Resolved direction.
    pub outcome: Direction,
}

/// Parses one record. `line` is only used for error reporting.
pub fn parse_record(text: &str, line: usize) -> Result<TraceRecord, TraceError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    match fields.as_slice() {
        [pc, outcome] => Ok(TraceRecord {
            branch: Branch::conditional(parse_addr(pc, "pc", line)?, 0),
            outcome: parse_flag(outcome, "outcome", line)?.into(),
        }),
        [pc, target, outcome, conditional, call, ret, direct] => Ok(TraceRecord {
            branch: Branch::from_flags(
                parse_addr(pc, "pc", line)?,
                parse_addr(target, "target", line)?,
                parse_flag(conditional, "conditional", line)?,
                parse_flag(call, "call", line)?,
                parse_flag(ret, "return", line)?,
                parse_flag(direct, "direct", line)?,
            ),
            outcome: parse_flag(outcome, "outcome", line)?.into(),
        }),
        _ => Err(TraceError::FieldCount {
            line,
            found: fields.len(),
        }),
    }
}

fn parse_addr(text: &str, field: &'static str, line: usize) -> Result<u32, TraceError> {
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| TraceError::Address {
        line,
        field,
        value: text.to_string(),
    })
}

fn parse_flag(text: &str, field: &'static str, line: usize) -> Result<bool, TraceError> {
    match text {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(TraceError::Flag {
            line,
            field,
            value: text.to_string(),
        }),
    }
}

/// Iterator over the records of a text trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(err) => return Some(Err(err.into())),
            }

            let text = self.buf.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(parse_record(text, self.line));
        }
    }
}
