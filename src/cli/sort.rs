//! Sort command implementation

use std::io::{self, BufRead};
use std::process::ExitCode;

use crate::input::parse_value;
use crate::sort::{descending, sort_ascending, sort_with_dyn};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the sort command
pub fn run_sort(values: &[i64], stdin: bool, desc: bool) -> ExitCode {
    let mut values = values.to_vec();

    if stdin {
        let stdin_handle = io::stdin();
        for (line_idx, line_result) in stdin_handle.lock().lines().enumerate() {
            let line_number = line_idx + 1;
            let line = match line_result {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error reading stdin at line {}: {}", line_number, e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_value(&line, line_number) {
                Ok(value) => values.push(value),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
    }

    if values.is_empty() {
        eprintln!("Error: No values to sort");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    if desc {
        let comparator = descending();
        sort_with_dyn(&mut values, &comparator);
    } else {
        sort_ascending(&mut values);
    }

    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    ExitCode::from(EXIT_SUCCESS)
}
