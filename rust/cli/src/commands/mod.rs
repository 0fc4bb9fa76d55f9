//! Subcommand handlers for the `grind` CLI.

pub mod play;
pub mod sim;
pub mod stats;
pub mod tricks;

pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;
pub use tricks::handle_tricks_command;
