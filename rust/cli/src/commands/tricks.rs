//! Trick catalog listing.

use std::io::Write;

use grind_engine::cards::{all_difficulties, trick_catalog};

use crate::error::CliError;
use crate::ui;

/// Handle the tricks command: print the catalog grouped by difficulty tier,
/// highest-scoring first within each tier.
pub fn handle_tricks_command(out: &mut dyn Write) -> Result<(), CliError> {
    let mut tricks = trick_catalog();
    tricks.sort_by(|a, b| b.points.cmp(&a.points));

    writeln!(out, "Trick catalog ({} tricks):", tricks.len())?;
    for tier in all_difficulties() {
        writeln!(out, "{:?}:", tier)?;
        for trick in tricks.iter().filter(|t| t.difficulty == tier) {
            writeln!(out, "  {} - {}", ui::format_card(trick), trick.description)?;
        }
    }
    Ok(())
}
