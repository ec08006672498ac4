//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod demo;
mod sort;
mod watch;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::HandlerKind;
use crate::demos::DemoName;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Vigil - watch integer readings through pluggable handlers
#[derive(Parser)]
#[command(name = "vgl")]
#[command(about = "Vigil - watch integer readings through pluggable handlers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Watch integer readings until the sentinel value 0
    Watch {
        /// Alert threshold (overrides vigil.toml)
        #[arg(long)]
        threshold: Option<i64>,

        /// Handler reacting to each value
        #[arg(long, value_enum)]
        handler: Option<HandlerKind>,

        /// Strict mode: treat malformed lines as errors
        #[arg(long)]
        strict: bool,

        /// Never print the input prompt
        #[arg(long)]
        no_prompt: bool,

        /// Append dispatched values to a JSONL session log
        #[arg(long, value_name = "FILE")]
        log: Option<PathBuf>,
    },

    /// Sort integer values with a comparison predicate
    Sort {
        /// Values to sort (omit if using --stdin)
        #[arg(required_unless_present = "stdin", allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Read values from stdin, one per line
        #[arg(long)]
        stdin: bool,

        /// Sort largest-first
        #[arg(long)]
        desc: bool,
    },

    /// Run handler demonstrations
    Demo {
        /// Demonstration to run (all of them, in order, when omitted)
        #[arg(value_enum)]
        name: Option<DemoName>,

        /// List available demonstrations
        #[arg(long)]
        list: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Watch {
            threshold,
            handler,
            strict,
            no_prompt,
            log,
        } => watch::run_watch(threshold, handler, strict, no_prompt, log),
        Commands::Sort { values, stdin, desc } => sort::run_sort(&values, stdin, desc),
        Commands::Demo { name, list } => demo::run_demo(name, list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_watch_flags() {
        let cli = Cli::try_parse_from([
            "vgl", "watch", "--threshold", "75", "--handler", "both", "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Watch {
                threshold,
                handler,
                strict,
                no_prompt,
                log,
            } => {
                assert_eq!(threshold, Some(75));
                assert_eq!(handler, Some(HandlerKind::Both));
                assert!(strict);
                assert!(!no_prompt);
                assert!(log.is_none());
            }
            _ => panic!("expected watch command"),
        }
    }

    #[test]
    fn test_parse_sort_negative_values() {
        let cli = Cli::try_parse_from(["vgl", "sort", "3", "-2", "6", "--desc"]).unwrap();
        match cli.command {
            Commands::Sort { values, stdin, desc } => {
                assert_eq!(values, vec![3, -2, 6]);
                assert!(!stdin);
                assert!(desc);
            }
            _ => panic!("expected sort command"),
        }
    }

    #[test]
    fn test_sort_requires_values_or_stdin() {
        assert!(Cli::try_parse_from(["vgl", "sort"]).is_err());
        assert!(Cli::try_parse_from(["vgl", "sort", "--stdin"]).is_ok());
    }

    #[test]
    fn test_parse_demo_name() {
        let cli = Cli::try_parse_from(["vgl", "demo", "lambda-predicate"]).unwrap();
        match cli.command {
            Commands::Demo { name, list } => {
                assert_eq!(name, Some(DemoName::LambdaPredicate));
                assert!(!list);
            }
            _ => panic!("expected demo command"),
        }
    }
}
