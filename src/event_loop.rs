//! The sentinel-terminated watch loop
//!
//! Reads one integer per line, dispatches every value to the handler (the
//! sentinel included), and stops at the sentinel or end of input. The loop is
//! generic over its reader, writer, and handler so callers can drive it with
//! real console streams or in-memory buffers alike.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::handler::Handler;
use crate::input::{read_value, ParseError, ReadOutcome, Warning};

/// Prompt written before each read when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter the next integer (0 for exit): ";

/// Error type for a failed watch loop.
#[derive(Debug, Error)]
pub enum LoopError {
    /// Reading or writing the console stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A malformed line in strict mode
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Options controlling a watch loop.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Prompt written before each read, without a trailing newline.
    /// `None` suppresses prompting entirely.
    pub prompt: Option<String>,
    /// Value that ends the loop. It is still dispatched to the handler.
    pub sentinel: i64,
    /// Strict mode: treat malformed lines as errors.
    pub strict: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            prompt: Some(DEFAULT_PROMPT.to_string()),
            sentinel: 0,
            strict: false,
        }
    }
}

impl LoopOptions {
    /// Options with no prompt, for piped input.
    pub fn silent() -> Self {
        Self {
            prompt: None,
            ..Self::default()
        }
    }
}

/// Result of a completed watch loop.
#[derive(Debug, Clone, Default)]
pub struct LoopSummary {
    /// Number of well-formed values dispatched, sentinel included.
    pub values_seen: usize,
    /// Warnings collected in lenient mode.
    pub warnings: Vec<Warning>,
    /// Whether the loop ended at the sentinel rather than end of input.
    pub hit_sentinel: bool,
}

/// Run the watch loop until the sentinel value or end of input.
///
/// Every value that parses is dispatched to `handler`, the sentinel included.
/// In lenient mode malformed lines become warnings and the loop keeps
/// reading; in strict mode the first malformed line aborts the loop.
pub fn run_loop<R: BufRead, W: Write, H: Handler>(
    reader: &mut R,
    writer: &mut W,
    handler: &mut H,
    options: &LoopOptions,
) -> Result<LoopSummary, LoopError> {
    let mut summary = LoopSummary::default();
    let mut line_number = 1;

    loop {
        match read_value(reader, writer, options.prompt.as_deref(), line_number)? {
            ReadOutcome::Eof => break,
            ReadOutcome::Malformed(e) => {
                if options.strict {
                    return Err(e.into());
                }
                summary.warnings.push(Warning::new(e.to_string()));
            }
            ReadOutcome::Value(value) => {
                summary.values_seen += 1;
                handler.on_value(value);
                if value == options.sentinel {
                    summary.hit_sentinel = true;
                    break;
                }
            }
        }
        line_number += 1;
    }

    Ok(summary)
}
