//! Demo command implementation

use std::io;
use std::process::ExitCode;

use crate::demos::{self, DemoName};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the demo command
pub fn run_demo(name: Option<DemoName>, list: bool) -> ExitCode {
    if list {
        for demo in DemoName::all() {
            println!("{:<17} {}", demo.label(), demo.blurb());
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    let one;
    let selected: &[DemoName] = match name {
        Some(demo) => {
            one = [demo];
            &one
        }
        None => DemoName::all(),
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    for demo in selected {
        println!("== {} - {}", demo.label(), demo.blurb());
        if let Err(e) = demos::run(*demo, &mut reader, &mut out) {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!();
    }

    ExitCode::from(EXIT_SUCCESS)
}
