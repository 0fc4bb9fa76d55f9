//! # Grind CLI Library
//!
//! Command-line interface for the G.R.I.N.D rules engine. Exposes
//! subcommands for playing, simulating, and analyzing matches.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["grind", "sim", "--games", "3", "--seed", "42"];
//! let code = grind_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run an interactive match from the terminal
//! - `sim`: Simulate self-running matches with random outcomes
//! - `stats`: Aggregate statistics from JSONL game histories
//! - `tricks`: List the trick catalog

use std::io::Write;

pub mod cli;
pub mod commands;
mod error;
pub mod ui;

use cli::{Commands, GrindCli};
use clap::Parser;

use commands::{
    handle_play_command, handle_sim_command, handle_stats_command, handle_tricks_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match GrindCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            // help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return 2;
                    }
                    2
                }
            };
        }
    };

    let outcome = match cli.cmd {
        Commands::Play {
            players,
            seed,
            word,
            log,
        } => {
            // stdin supports both TTY and piped sessions
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(players, seed, word, log, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            players,
            seed,
            output,
        } => handle_sim_command(games, players, seed, output, out, err),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Tricks => handle_tricks_command(out),
    };

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}
