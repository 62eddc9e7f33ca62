//! ACH File Builder CLI
//!
//! Reads a payment batch from a JSON file, validates it, and writes the
//! encoded NACHA file to stdout. Validation issues go to stderr; any
//! error-severity issue blocks encoding.
//!
//! # Usage
//!
//! ```bash
//! ach-file-builder payroll.json > payroll.ach
//! ach-file-builder --check payroll.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace validation and encoding

use ach_file_builder::{encode, validate_batch, BuildError, PaymentBatch, Result, Severity};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut check_only = false;
    let mut input = None;

    for arg in env::args().skip(1) {
        if arg == "--check" {
            check_only = true;
        } else if arg.starts_with('-') {
            return Err(BuildError::UnknownOption(arg));
        } else {
            input = Some(arg);
        }
    }

    let input = input.ok_or(BuildError::MissingArgument)?;
    let file = File::open(&input)?;
    let batch: PaymentBatch = serde_json::from_reader(BufReader::new(file))?;

    let issues = validate_batch(&batch);
    for issue in &issues {
        eprintln!("{}", issue);
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(BuildError::ValidationFailed { errors });
    }

    if check_only {
        return Ok(());
    }

    let output = encode(&batch);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", output)?;

    Ok(())
}
