//! Vigil - command-line tool for watching integer readings through pluggable handlers

use std::process::ExitCode;

use vigil::cli;

fn main() -> ExitCode {
    cli::run()
}
