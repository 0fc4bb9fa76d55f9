//! UI helper functions for terminal output formatting.

use std::io::Write;

use grind_engine::cards::TrickCard;
use grind_engine::player::Player;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Collected letters in display form, e.g. "G.R.I"
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// One-line card summary, e.g. "Kickflip [Intermediate] 25 pts"
pub fn format_card(card: &TrickCard) -> String {
    format!("{} [{:?}] {} pts", card.name, card.difficulty, card.points)
}

/// One-line scoreboard entry for a player.
pub fn format_standing(player: &Player) -> String {
    let status = if player.is_eliminated {
        " OUT".to_string()
    } else if player.letters.is_empty() {
        String::new()
    } else {
        format!(" [{}]", format_letters(&player.letters))
    };
    format!(
        "{}: {} pts ({}/{} tricks){}",
        player.name, player.score, player.tricks_landed, player.tricks_attempted, status
    )
}
