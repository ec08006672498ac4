//! Guided tour of the handler mechanisms
//!
//! Each demonstration is a standalone function invoked once by the `demo`
//! subcommand. The order in [`DemoName::all`] is deliberate: the reaction
//! starts out welded into the loop, then moves into a function pointer, a
//! stateful handler object, an argument, and finally an inline closure.

use std::io::{BufRead, Write};

use clap::ValueEnum;

use crate::event_loop::{run_loop, LoopError, LoopOptions, DEFAULT_PROMPT};
use crate::handler::{pick_runtime_handler, Handler, HandlerFn, ThresholdAlert, DEFAULT_THRESHOLD};
use crate::input::{read_value, ReadOutcome};
use crate::sort::{sort_ascending, sort_with, Descending, CLASSIC_VALUES};

/// The available demonstrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoName {
    Hardcoded,
    Runtime,
    Stateful,
    Passed,
    Closure,
    Closures,
    Predicate,
    LambdaPredicate,
}

impl DemoName {
    /// All demonstrations, in presentation order.
    pub fn all() -> &'static [DemoName] {
        &[
            DemoName::Hardcoded,
            DemoName::Runtime,
            DemoName::Stateful,
            DemoName::Passed,
            DemoName::Closure,
            DemoName::Closures,
            DemoName::Predicate,
            DemoName::LambdaPredicate,
        ]
    }

    /// Kebab-case name as accepted on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            DemoName::Hardcoded => "hardcoded",
            DemoName::Runtime => "runtime",
            DemoName::Stateful => "stateful",
            DemoName::Passed => "passed",
            DemoName::Closure => "closure",
            DemoName::Closures => "closures",
            DemoName::Predicate => "predicate",
            DemoName::LambdaPredicate => "lambda-predicate",
        }
    }

    /// One-line description shown by `--list` and before each run.
    pub fn blurb(&self) -> &'static str {
        match self {
            DemoName::Hardcoded => "threshold check inlined in the loop body",
            DemoName::Runtime => "handler picked by coin flip, held in a function pointer",
            DemoName::Stateful => "alert handler object carrying its own threshold",
            DemoName::Passed => "handler passed as an argument to the shared loop",
            DemoName::Closure => "shared loop driven by an inline closure",
            DemoName::Closures => "closure catalogue: invocation and captures",
            DemoName::Predicate => "sort with a named comparison object",
            DemoName::LambdaPredicate => "sort with an inline comparison closure",
        }
    }
}

/// Run one demonstration.
pub fn run<R: BufRead, W: Write>(
    name: DemoName,
    reader: &mut R,
    writer: &mut W,
) -> Result<(), LoopError> {
    match name {
        DemoName::Hardcoded => hardcoded(reader, writer),
        DemoName::Runtime => runtime(reader, writer),
        DemoName::Stateful => stateful(reader, writer),
        DemoName::Passed => passed(reader, writer),
        DemoName::Closure => closure(reader, writer),
        DemoName::Closures => closures(writer),
        DemoName::Predicate => predicate(writer),
        DemoName::LambdaPredicate => lambda_predicate(writer),
    }
}

/// The reaction is welded into the loop body. It works, but swapping it
/// means editing the loop.
fn hardcoded<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), LoopError> {
    let mut line_number = 1;
    loop {
        match read_value(reader, writer, Some(DEFAULT_PROMPT), line_number)? {
            ReadOutcome::Eof => break,
            ReadOutcome::Malformed(_) => {}
            ReadOutcome::Value(value) => {
                if value > DEFAULT_THRESHOLD {
                    println!("Alert!");
                }
                if value == 0 {
                    break;
                }
            }
        }
        line_number += 1;
    }
    Ok(())
}

/// The reaction is picked at startup and held in a plain function pointer,
/// so the same loop can alert or echo depending on the flip.
fn runtime<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), LoopError> {
    let handler: HandlerFn = pick_runtime_handler();

    let mut line_number = 1;
    loop {
        match read_value(reader, writer, Some(DEFAULT_PROMPT), line_number)? {
            ReadOutcome::Eof => break,
            ReadOutcome::Malformed(_) => {}
            ReadOutcome::Value(value) => {
                handler(value);
                if value == 0 {
                    break;
                }
            }
        }
        line_number += 1;
    }
    Ok(())
}

/// The reaction is a handler object constructed with its own threshold.
/// Function pointers cannot carry state; a handler object can.
fn stateful<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), LoopError> {
    let mut handler = ThresholdAlert::new(DEFAULT_THRESHOLD);

    let mut line_number = 1;
    loop {
        match read_value(reader, writer, Some(DEFAULT_PROMPT), line_number)? {
            ReadOutcome::Eof => break,
            ReadOutcome::Malformed(_) => {}
            ReadOutcome::Value(value) => {
                handler.on_value(value);
                if value == 0 {
                    break;
                }
            }
        }
        line_number += 1;
    }
    Ok(())
}

/// The duplicated loop collapses into `run_loop`; the handler arrives as an
/// argument.
fn passed<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), LoopError> {
    let mut handler = pick_runtime_handler();
    run_loop(reader, writer, &mut handler, &LoopOptions::default())?;
    Ok(())
}

/// No separate function at all: the handler is written where it is used.
fn closure<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<(), LoopError> {
    let mut handler = |value: i64| println!("New value: {}", value);
    run_loop(reader, writer, &mut handler, &LoopOptions::default())?;
    Ok(())
}

/// Closure catalogue: definition, invocation, and the capture modes.
fn closures<W: Write>(writer: &mut W) -> Result<(), LoopError> {
    // defined and invoked on the spot
    let announced = (|n: i64| format!("New value: {}", n))(123);
    writeln!(writer, "{}", announced)?;

    // zero arguments, return type deduced
    let greet = || String::from("Hello from a closure!");
    writeln!(writer, "{}", greet())?;

    // capture by reference
    let threshold = DEFAULT_THRESHOLD;
    let over = |n: i64| n > threshold;
    writeln!(writer, "is 60 over {}? {}", threshold, over(60))?;

    // capture by move: the closure owns the label from here on
    let label = String::from("reading");
    let describe = move |n: i64| format!("{} #{}", label, n);
    writeln!(writer, "{}", describe(7))?;

    // mutable capture
    let mut count = 0;
    let mut bump = || count += 1;
    bump();
    bump();
    writeln!(writer, "bumped {} times", count)?;

    // stored now, called later
    let stored = |n: i64| n * 2;
    writeln!(writer, "stored(21) = {}", stored(21))?;

    Ok(())
}

/// Sort ascending by natural order, then descending through a named
/// comparison object.
fn predicate<W: Write>(writer: &mut W) -> Result<(), LoopError> {
    let mut values = CLASSIC_VALUES.to_vec();

    sort_ascending(&mut values);
    writeln!(writer, "ascending:  {:?}", values)?;

    sort_with(&mut values, &Descending);
    writeln!(writer, "descending: {:?}", values)?;

    Ok(())
}

/// The same descending sort, with the predicate written inline.
fn lambda_predicate<W: Write>(writer: &mut W) -> Result<(), LoopError> {
    let mut values = CLASSIC_VALUES.to_vec();

    values.sort_unstable();
    writeln!(writer, "ascending:  {:?}", values)?;

    values.sort_unstable_by(|a, b| b.cmp(a));
    writeln!(writer, "descending: {:?}", values)?;

    Ok(())
}
