//! Watch command implementation

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{apply_overrides, load_or_default, CliOverrides, HandlerKind};
use crate::event_loop::{run_loop, LoopOptions};
use crate::handler::{EchoHandler, Handler, ThresholdAlert};
use crate::session::{init_session, is_recording, record, SessionEntry};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the watch command
pub fn run_watch(
    threshold: Option<i64>,
    handler: Option<HandlerKind>,
    strict: bool,
    no_prompt: bool,
    log: Option<PathBuf>,
) -> ExitCode {
    let overrides = CliOverrides {
        threshold,
        handler,
        strict: strict.then_some(true),
        log_path: log,
    };

    let config = match load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let config = apply_overrides(config, &overrides);

    init_session(&config.log.path, config.log.enabled);

    // Piped input gets no prompt so the output stays clean
    let prompt =
        (!no_prompt && atty::is(atty::Stream::Stdin)).then(|| config.watch.prompt.clone());
    let options = LoopOptions {
        prompt,
        sentinel: 0,
        strict: config.watch.strict,
    };

    let kind = config.watch.handler;
    let mut alerter = ThresholdAlert::new(config.watch.threshold);
    let mut echoer = EchoHandler::new();
    let mut dispatch = |value: i64| {
        match kind {
            HandlerKind::Alert => alerter.on_value(value),
            HandlerKind::Echo => echoer.on_value(value),
            HandlerKind::Both => {
                alerter.on_value(value);
                echoer.on_value(value);
            }
        }
        if is_recording() {
            let fired = kind != HandlerKind::Echo && alerter.fires_on(value);
            record(&SessionEntry::new("watch", value, kind.name(), fired));
        }
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    match run_loop(&mut reader, &mut out, &mut dispatch, &options) {
        Ok(summary) => {
            for warning in &summary.warnings {
                eprintln!("Warning: {}", warning.message);
            }
            println!("Watched {} value(s)", summary.values_seen);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
