use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::game::GameSnapshot;
use crate::player::Player;

/// Per-player outcome of a finished match, the shape the history store keeps.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player_name: String,
    pub final_score: u32,
    /// Collected letters joined with commas, e.g. "G,R,I"
    pub final_letters: String,
    /// Rank among surviving players by score; None for the eliminated
    pub final_position: Option<usize>,
    pub tricks_landed: u32,
    pub tricks_attempted: u32,
}

/// Complete record of one finished match, serialized to JSONL for history
/// storage and stats.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Deck RNG seed, enables deterministic replay of the draw order
    pub seed: Option<u64>,
    /// Elimination word the match was played to
    pub word: String,
    pub total_rounds: u32,
    pub total_players: usize,
    pub winner_name: Option<String>,
    pub winner_score: Option<u32>,
    pub players: Vec<PlayerResult>,
    /// RFC3339 match start
    pub start_time: String,
    /// RFC3339 match end
    #[serde(default)]
    pub end_time: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Builds a record from a finished match snapshot.
    ///
    /// Positions rank non-eliminated players by descending score, 1-based;
    /// eliminated players carry no position.
    pub fn from_snapshot(snapshot: &GameSnapshot, seed: Option<u64>) -> Self {
        let players = snapshot
            .players
            .iter()
            .map(|p| PlayerResult {
                player_name: p.name.clone(),
                final_score: p.score,
                final_letters: join_letters(p),
                final_position: final_position(&snapshot.players, p),
                tricks_landed: p.tricks_landed,
                tricks_attempted: p.tricks_attempted,
            })
            .collect();

        Self {
            game_id: String::new(),
            seed,
            word: snapshot.game_word.clone(),
            total_rounds: snapshot.round,
            total_players: snapshot.players.len(),
            winner_name: snapshot.winner.as_ref().map(|w| w.name.clone()),
            winner_score: snapshot.winner.as_ref().map(|w| w.score),
            players,
            start_time: snapshot.start_time.clone(),
            end_time: snapshot.end_time.clone(),
            meta: None,
        }
    }
}

fn join_letters(player: &Player) -> String {
    player
        .letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn final_position(players: &[Player], player: &Player) -> Option<usize> {
    if player.is_eliminated {
        return None;
    }
    let mut standing: Vec<&Player> = players.iter().filter(|p| !p.is_eliminated).collect();
    standing.sort_by(|a, b| b.score.cmp(&a.score));
    standing.iter().position(|p| p.id == player.id).map(|i| i + 1)
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`GameRecord`]s to a JSONL history file, one line per match.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Opens an existing history for appending, creating it if absent.
    /// The id sequence resumes after the records already on disk, so two
    /// sessions logging to the same file never collide.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let existing = std::fs::read_to_string(&path)
            .map(|s| s.lines().filter(|l| !l.trim().is_empty()).count())
            .unwrap_or(0);
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: existing as u32,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // stamp the record if the match never recorded its own end
        let mut rec = record.clone();
        if rec.end_time.is_none() {
            rec.end_time = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
