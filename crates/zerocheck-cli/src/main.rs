//! Zero-value checker - CLI
//!
//! Checks a fixed pair of sample values and prints one boolean per line.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use zerocheck_core::{CheckConfig, Record, Value, ZeroChecker, ZeroError};

#[derive(Parser)]
#[command(name = "zerocheck")]
#[command(about = "Report whether sample values are the zero value of their kind")]
#[command(version)]
struct Cli {}

#[derive(Debug, Error)]
enum CliError {
    #[error("{}: {0}", .0.kind())]
    Check(#[from] ZeroError),

    #[error("output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    init_logging();
    let _cli = Cli::parse();

    let checker = ZeroChecker::new(CheckConfig::default());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&checker, &sample_values(), &mut out) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Write one result per value; stops at the first failure
fn run(checker: &ZeroChecker, values: &[Value], out: &mut impl Write) -> Result<(), CliError> {
    for value in values {
        let zero = checker.is_zero(value)?;
        writeln!(out, "{}", zero)?;
    }
    out.flush()?;
    Ok(())
}

/// Record `{A: 1}` followed by the integer `0`
fn sample_values() -> Vec<Value> {
    vec![
        Value::from(Record::new().with_field("A", 1)),
        Value::Int(0),
    ]
}

// stdout carries results only; diagnostics go to stderr
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
