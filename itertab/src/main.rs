//! # itertab
//!
//! A CLI tool that tabulates iteration counts from a directory of attack
//! result logs.
//!
//! ## Overview
//!
//! itertab is built on top of itertablib. It reads every entry of the given
//! directory, takes the attack index from the `_<N>.out` file name suffix and
//! the iteration count from the `[SUCCESS]`/`[FAILURE]` status line, and prints
//! the rows sorted by attack index.
//!
//! ## Usage
//!
//! ```bash
//! # Tab-separated table
//! itertab results/ text
//!
//! # LaTeX fragment for a report
//! itertab results/ latex > table.tex
//!
//! # Show every file and record as it is processed
//! itertab results/ text --verbose
//! ```
//!
//! Diagnostics and I/O errors go to stderr and can be tuned with `RUST_LOG`.
//! An unknown table type is reported on stdout and exits with status 1.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use itertablib::{build_table, IterTableError, TableFormat};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("itertab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Tabulate iteration counts from attack result logs as text or LaTeX")
        .arg(
            Arg::new("directory")
                .required(true)
                .help("Directory containing the *_<N>.out result files"),
        )
        .arg(
            Arg::new("table_type")
                .required(true)
                .value_name("TABLE_TYPE")
                .help(format!(
                    "Table type to print: {}",
                    TableFormat::NAMES.join(" or ")
                )),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every listed file and extracted record"),
        )
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Parse the arguments and produce the rendered table.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let directory = matches
        .get_one::<String>("directory")
        .context("missing directory argument")?;
    let table_type = matches
        .get_one::<String>("table_type")
        .context("missing table type argument")?;

    let format: TableFormat = table_type.parse()?;

    let table = build_table(directory, format)
        .with_context(|| format!("cannot build {format} table for '{directory}'"))?;

    Ok(table)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(table) => {
            println!("{table}");
            ExitCode::SUCCESS
        }
        // A bad selector is reported on stdout, where the table would have gone.
        Err(e) => match e.downcast_ref::<IterTableError>() {
            Some(invalid @ IterTableError::InvalidTableType(_)) => {
                println!("{invalid}");
                ExitCode::FAILURE
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
