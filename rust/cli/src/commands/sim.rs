//! Simulation command handler for batch match generation.
//!
//! Runs self-playing matches with coin-flip trick outcomes, useful for
//! exercising the rules engine and producing JSONL histories for the
//! `stats` command.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use grind_engine::game::{Game, GameConfig};
use grind_engine::logger::{format_game_id, GameLogger, GameRecord};
use grind_engine::turn::AttemptResult;

use crate::error::CliError;
use crate::ui;

// circuit breaker for a match that refuses to end; with random outcomes a
// match of 16 players finishes orders of magnitude sooner
const MAX_TURNS_PER_GAME: usize = 10_000;

/// Handle the sim command: run `games` matches and report the winners.
///
/// Match `i` seeds its deck with `seed + i`, and attempt outcomes come from
/// a ChaCha stream seeded with the same base, so a sim run is reproducible
/// end to end.
pub fn handle_sim_command(
    games: u64,
    players: Vec<String>,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let players = if players.is_empty() {
        vec!["Player 1".to_string(), "Player 2".to_string()]
    } else {
        players
    };

    let base_seed = seed.unwrap_or_else(rand::random);
    let mut outcomes = ChaCha20Rng::seed_from_u64(base_seed);
    let mut logger = match output.as_ref() {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };
    let today = Utc::now().format("%Y%m%d").to_string();

    writeln!(out, "sim: games={} seed={}", games, base_seed)?;

    let mut wins: BTreeMap<String, u64> = BTreeMap::new();
    for i in 0..games {
        let config = GameConfig {
            seed: Some(base_seed.wrapping_add(i)),
            ..GameConfig::default()
        };
        let mut game = Game::with_config(&players, None, config)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;

        let mut turns = 0usize;
        while !game.is_game_over() {
            if turns >= MAX_TURNS_PER_GAME {
                ui::display_warning(err, &format!("game {} hit the turn limit, skipping", i + 1))?;
                break;
            }
            let result = if outcomes.random_bool(0.5) {
                AttemptResult::Landed
            } else {
                AttemptResult::Failed
            };
            game.process_turn(result)?;
            turns += 1;
        }
        if !game.is_game_over() {
            continue;
        }

        let state = game.state();
        let winner = state.winner.as_ref().map(|w| w.name.clone());
        if let Some(name) = &winner {
            *wins.entry(name.clone()).or_insert(0) += 1;
        }
        writeln!(
            out,
            "game {}: winner={} rounds={} turns={}",
            i + 1,
            winner.as_deref().unwrap_or("-"),
            state.round,
            state.turns.len()
        )?;

        let mut record = GameRecord::from_snapshot(&state, Some(game.seed()));
        record.game_id = match logger.as_mut() {
            Some(logger) => logger.next_id(),
            None => format_game_id(&today, (i + 1) as u32),
        };
        if let Some(logger) = logger.as_mut() {
            logger.write(&record)?;
        }
    }

    writeln!(out, "\nWins:")?;
    for (name, count) in &wins {
        writeln!(out, "  {}: {}", name, count)?;
    }
    if let Some(path) = output {
        writeln!(out, "History written to {}", path)?;
    }
    Ok(())
}
