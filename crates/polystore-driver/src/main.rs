//! Process entry point: run every strategy once and print the report.
//!
//! No flags, no input, no files. One line per strategy on stdout in
//! report order; a fatal error goes to stderr with a non-zero exit.

use std::process::ExitCode;

use polystore_driver::{run_all, DEFAULT_LEN};

fn main() -> ExitCode {
    match run_all(DEFAULT_LEN) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("benchmark run failed: {err}");
            ExitCode::FAILURE
        }
    }
}
