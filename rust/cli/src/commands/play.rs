//! # Play Command
//!
//! Interactive G.R.I.N.D match driven from the terminal.
//!
//! The caller types the outcome of each real-world trick attempt; the engine
//! keeps score, hands out letters, and decides the winner. Input is read
//! from an injected [`BufRead`] so tests can script a whole session.

use std::io::{BufRead, Write};

use grind_engine::game::{Game, GameConfig};
use grind_engine::logger::{GameLogger, GameRecord};
use grind_engine::player::EliminationWord;
use grind_engine::turn::{AttemptResult, TurnPhase};

use crate::error::CliError;
use crate::ui;

/// Handle the play command: interactive match loop.
///
/// Prompts for `l`/`landed`, `f`/`failed`, or `q`/`quit` each turn. EOF on
/// stdin ends the session like a quit. With `--log` the finished match is
/// appended to a JSONL history file.
pub fn handle_play_command(
    players: Vec<String>,
    seed: Option<u64>,
    word: Option<String>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = GameConfig {
        seed,
        word: word
            .as_deref()
            .map(EliminationWord::new)
            .unwrap_or_default(),
        ..GameConfig::default()
    };
    let mut game = Game::with_config(&players, None, config)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    writeln!(
        out,
        "play: players={} word={} seed={}",
        players.join(","),
        game.state().game_word,
        game.seed()
    )?;

    let mut quit_requested = false;
    while !game.is_game_over() {
        let state = game.state();
        let Some(actor) = game.current_player() else {
            break;
        };
        let role = match state.turn_phase {
            TurnPhase::Leader => "leader",
            TurnPhase::Follower => "follower",
        };
        match &state.current_card {
            Some(card) => writeln!(out, "\nCard: {}", ui::format_card(card))?,
            None => writeln!(out, "\nCard: (none)")?,
        }
        write!(out, "{} ({}) - [l]anded / [f]ailed / [q]uit: ", actor.name, role)?;
        out.flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            quit_requested = true;
            break;
        }
        let result = match line.trim().to_lowercase().as_str() {
            "l" | "landed" => AttemptResult::Landed,
            "f" | "failed" | "bailed" => AttemptResult::Failed,
            "q" | "quit" => {
                quit_requested = true;
                break;
            }
            other => {
                ui::write_error(err, &format!("unrecognized input: {}", other))?;
                continue;
            }
        };
        game.process_turn(result)?;

        let state = game.state();
        if let Some(player) = state.players.iter().find(|p| p.id == actor.id) {
            writeln!(out, "{}", ui::format_standing(player))?;
        }
    }

    let state = game.state();
    writeln!(out, "\nFinal standings:")?;
    for player in &state.players {
        writeln!(out, "  {}", ui::format_standing(player))?;
    }
    match &state.winner {
        Some(winner) => writeln!(out, "{} wins with {} points!", winner.name, winner.score)?,
        None if quit_requested => writeln!(out, "Match abandoned before a winner was decided")?,
        None => {}
    }

    if let Some(path) = log {
        if game.is_game_over() {
            let mut logger = GameLogger::append(&path)?;
            let mut record = GameRecord::from_snapshot(&state, Some(game.seed()));
            record.game_id = logger.next_id();
            logger.write(&record)?;
            writeln!(out, "Game record written to {}", path)?;
        } else {
            ui::display_warning(err, "match unfinished, no game record written")?;
        }
    }
    Ok(())
}
