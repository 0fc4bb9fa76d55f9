//! Command-line argument definitions for the `grind` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "grind", version, about = "G.R.I.N.D trick battle scorekeeper")]
pub struct GrindCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an interactive match from the terminal
    Play {
        /// Comma-separated player names (2-16)
        #[arg(long, value_delimiter = ',', required = true)]
        players: Vec<String>,
        /// Deck RNG seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
        /// Elimination word (default: GRIND)
        #[arg(long)]
        word: Option<String>,
        /// Append the finished game record to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Simulate self-running matches with random outcomes
    Sim {
        /// Number of matches to simulate
        #[arg(long, default_value_t = 1)]
        games: u64,
        /// Comma-separated player names (default: Player 1, Player 2)
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,
        /// Base RNG seed (match i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Save game records to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL game history
    Stats {
        /// Path to a JSONL history file
        #[arg(long)]
        input: String,
    },
    /// List the trick catalog
    Tricks,
}
