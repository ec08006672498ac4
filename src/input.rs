//! Reading integer values from a console stream
//!
//! One value per line. Malformed lines surface as [`ReadOutcome::Malformed`]
//! so callers can choose between lenient (warn and keep reading) and strict
//! (abort) handling.

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Error type for a line that does not parse as an integer.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: not an integer: '{text}'")]
pub struct ParseError {
    pub text: String,
    pub line: usize,
}

/// A warning generated while reading values
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a single read attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// A well-formed integer value.
    Value(i64),
    /// The line did not parse; the reader has already consumed it.
    Malformed(ParseError),
    /// End of input.
    Eof,
}

/// Parse one line as an integer value.
///
/// Leading and trailing whitespace is ignored. A leading `+` or `-` sign is
/// accepted, anything else is a [`ParseError`] carrying the offending text.
pub fn parse_value(line: &str, line_number: usize) -> Result<i64, ParseError> {
    let text = line.trim();
    text.parse::<i64>().map_err(|_| ParseError {
        text: text.to_string(),
        line: line_number,
    })
}

/// Prompt for and read a single value.
///
/// Writes `prompt` (without a trailing newline) when given, then reads one
/// line from `reader` and parses it. Only I/O failures are `Err`; a line that
/// does not parse is reported through [`ReadOutcome::Malformed`].
pub fn read_value<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: Option<&str>,
    line_number: usize,
) -> io::Result<ReadOutcome> {
    if let Some(prompt) = prompt {
        write!(writer, "{}", prompt)?;
        writer.flush()?;
    }

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(ReadOutcome::Eof);
    }

    match parse_value(&line, line_number) {
        Ok(value) => Ok(ReadOutcome::Value(value)),
        Err(e) => Ok(ReadOutcome::Malformed(e)),
    }
}
