//! SDB CLI
//!
//! Loads a names/IDs file and a marks file into an in-memory store with a
//! by-name and a by-ID index, then answers commands at an `sdb>` prompt.
//!
//! # Commands
//!
//! - `LN` - List records ordered by last name
//! - `LI` - List records ordered by student ID
//! - `FN` - Find a record by last name
//! - `FI` - Find a record by student ID
//! - `HELP`, `?` - Print the command list
//! - `Q` - Quit

mod command;
mod render;
mod session;

use clap::Parser;
use render::Format;
use sdb_core::{ingest, Config, CoreError, NamePolicy, DEFAULT_MAX_NAME_LEN};
use session::Session;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Wrong arguments.
const EXIT_USAGE: u8 = 255;
/// An input file could not be opened.
const EXIT_OPEN: u8 = 254;
/// A name in the input exceeded the length limit.
const EXIT_NAME_TOO_LONG: u8 = 253;
/// Reading input or writing output failed.
const EXIT_IO: u8 = 252;

/// Student record database.
#[derive(Parser)]
#[command(name = "sdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of `first last id` rows
    names_ids: PathBuf,

    /// File of scores, one per row of NAMES_IDS
    marks: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format for listings and lookups
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Longest accepted first or last name, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_LEN, value_parser = parse_max_name_len)]
    max_name_len: usize,

    /// Truncate over-long names instead of rejecting the input
    #[arg(long)]
    truncate_names: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let policy = if self.truncate_names {
            NamePolicy::Truncate
        } else {
            NamePolicy::Reject
        };
        Config::new()
            .max_name_len(self.max_name_len)
            .name_policy(policy)
    }
}

fn parse_max_name_len(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(len) => Ok(len),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too.
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Logs go to stderr; stdout carries the interactive session.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<(), CoreError> {
    println!("Building database...");
    let store = ingest::load_store(&cli.names_ids, &cli.marks, &cli.config())?;
    println!("Finished, {} records found...", store.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit = Session::new(&store, stdin.lock(), stdout.lock(), cli.format).run()?;
    tracing::debug!(?exit, "session ended");
    Ok(())
}

fn exit_code(err: &CoreError) -> u8 {
    match err {
        CoreError::Open { .. } => EXIT_OPEN,
        CoreError::NameTooLong { .. } => EXIT_NAME_TOO_LONG,
        CoreError::Io(_) => EXIT_IO,
    }
}
