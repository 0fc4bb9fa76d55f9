use serde::{Deserialize, Serialize};

/// Minimum number of entrants required to start a match.
pub const MIN_PLAYERS: usize = 2;
/// Maximum number of entrants in one match.
pub const MAX_PLAYERS: usize = 16;

/// The ordered letter sequence players collect on failed attempts.
/// Collecting every letter eliminates the player. The word is configuration
/// data: a shorter or longer word changes the match length, not the code.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EliminationWord(Vec<char>);

impl EliminationWord {
    pub fn new(word: &str) -> Self {
        Self(word.chars().collect())
    }

    /// Letter at `index`, in collection order.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.0.iter().collect()
    }
}

impl Default for EliminationWord {
    fn default() -> Self {
        Self::new("GRIND")
    }
}

/// Mutable per-match player record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable id within the match (roster index at creation)
    pub id: usize,
    /// Display name, unique among entrants
    pub name: String,
    /// Total points scored, never decreases during a match
    pub score: u32,
    /// One-way flag set when the elimination word completes
    pub is_eliminated: bool,
    /// Collected elimination-word letters, append-only
    pub letters: Vec<char>,
    /// Consecutive landed tricks since the last failure or leadership change
    pub streak: u32,
    /// Landed attempts, for statistics
    pub tricks_landed: u32,
    /// Total attempts, for statistics
    pub tricks_attempted: u32,
}

impl Player {
    fn new(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            score: 0,
            is_eliminated: false,
            letters: Vec::new(),
            streak: 0,
            tricks_landed: 0,
            tricks_attempted: 0,
        }
    }
}

/// Shallow field merge applied by [`PlayerRoster::update_player`].
/// Only the fields set to `Some` are written; everything else is untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub score: Option<u32>,
    pub streak: Option<u32>,
    pub tricks_landed: Option<u32>,
    pub tricks_attempted: Option<u32>,
}

impl PlayerUpdate {
    pub fn score(mut self, score: u32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn tricks_landed(mut self, landed: u32) -> Self {
        self.tricks_landed = Some(landed);
        self
    }

    pub fn tricks_attempted(mut self, attempted: u32) -> Self {
        self.tricks_attempted = Some(attempted);
        self
    }
}

/// The roster of players in one match and their elimination bookkeeping.
///
/// The roster is the single owner of player state; callers receive clones,
/// never references into the internal vector. Lookup misses are silent
/// no-ops: the machine favors leaving state unchanged over failing a turn.
#[derive(Debug, Clone)]
pub struct PlayerRoster {
    players: Vec<Player>,
    word: EliminationWord,
}

impl PlayerRoster {
    pub fn new(names: &[String], word: EliminationWord) -> Self {
        let players = names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name.clone()))
            .collect();
        Self { players, word }
    }

    pub fn word(&self) -> &EliminationWord {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players in registry order, cloned.
    pub fn players(&self) -> Vec<Player> {
        self.players.clone()
    }

    /// Non-eliminated players in registry order (stable, never score-sorted).
    pub fn active_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| !p.is_eliminated)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Appends the next elimination-word letter to the named player.
    ///
    /// Returns true when this letter completed the word and eliminated the
    /// player. Calling on an eliminated, complete, or unknown player is a
    /// no-op returning false.
    pub fn add_letter(&mut self, id: usize) -> bool {
        let word_len = self.word.len();
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if player.is_eliminated || player.letters.len() >= word_len {
            return false;
        }
        if let Some(letter) = self.word.letter(player.letters.len()) {
            player.letters.push(letter);
        }
        if player.letters.len() == word_len {
            player.is_eliminated = true;
            return true;
        }
        false
    }

    /// Merges the `Some` fields of `update` into the named player.
    /// Unknown ids leave the roster unchanged.
    pub fn update_player(&mut self, id: usize, update: PlayerUpdate) {
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return;
        };
        if let Some(score) = update.score {
            player.score = score;
        }
        if let Some(streak) = update.streak {
            player.streak = streak;
        }
        if let Some(landed) = update.tricks_landed {
            player.tricks_landed = landed;
        }
        if let Some(attempted) = update.tricks_attempted {
            player.tricks_attempted = attempted;
        }
    }

    /// The match ends once at most one player remains standing.
    pub fn check_game_over(&self) -> bool {
        self.players.iter().filter(|p| !p.is_eliminated).count() <= 1
    }

    /// The sole remaining active player, if exactly one is left.
    pub fn winner(&self) -> Option<Player> {
        let mut active = self.players.iter().filter(|p| !p.is_eliminated);
        match (active.next(), active.next()) {
            (Some(winner), None) => Some(winner.clone()),
            _ => None,
        }
    }
}
