use serde::{Deserialize, Serialize};

use crate::cards::{trick_catalog, TrickCard};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{EliminationWord, Player, PlayerRoster, MAX_PLAYERS, MIN_PLAYERS};
use crate::turn::{now_rfc3339, AttemptResult, Turn, TurnManager, TurnPhase, DEFAULT_LEADER_STREAK_CAP};

/// Injectable match configuration.
///
/// The elimination word, trick catalog, RNG seed, and leader streak cap are
/// data, not code: tests run with tiny words and decks, production runs with
/// the defaults.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word: EliminationWord,
    pub catalog: Vec<TrickCard>,
    /// Deck RNG seed; None picks a random one
    pub seed: Option<u64>,
    pub leader_streak_cap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word: EliminationWord::default(),
            catalog: trick_catalog(),
            seed: None,
            leader_streak_cap: DEFAULT_LEADER_STREAK_CAP,
        }
    }
}

/// Read-only, JSON-serializable view of a match.
///
/// Every call to [`Game::state`] builds a fresh copy; holding a snapshot
/// never aliases live match state. This is the exact shape the persistence
/// and UI layers consume.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_started: bool,
    pub players: Vec<Player>,
    pub current_card: Option<TrickCard>,
    pub turn_phase: TurnPhase,
    pub round: u32,
    pub is_game_over: bool,
    pub game_word: String,
    pub turns: Vec<Turn>,
    pub current_leader_id: usize,
    pub current_follower_id: Option<usize>,
    pub winner: Option<Player>,
    /// Count of non-eliminated players
    pub active_players: usize,
    #[serde(default)]
    pub created_by: Option<String>,
    /// RFC3339 match start
    pub start_time: String,
    /// RFC3339 match end, set when the winner is decided
    #[serde(default)]
    pub end_time: Option<String>,
}

/// One match of G.R.I.N.D: roster + turn machine behind a single entry point.
///
/// The facade owns its roster and turn machine exclusively; all mutation
/// happens inside [`process_turn`](Self::process_turn) and all reads return
/// copies.
#[derive(Debug, Clone)]
pub struct Game {
    roster: PlayerRoster,
    turns: TurnManager,
    game_started: bool,
    is_game_over: bool,
    winner: Option<Player>,
    created_by: Option<String>,
    start_time: String,
    end_time: Option<String>,
    seed: u64,
}

impl Game {
    /// Starts a match with the default word, catalog, and house rules.
    pub fn new(player_names: &[String], created_by: Option<String>) -> Result<Self, GameError> {
        Self::with_config(player_names, created_by, GameConfig::default())
    }

    /// Starts a match with explicit configuration.
    ///
    /// Requires between [`MIN_PLAYERS`] and [`MAX_PLAYERS`] uniquely named
    /// entrants. The first name in the list leads the opening round, and the
    /// opening card is drawn immediately.
    pub fn with_config(
        player_names: &[String],
        created_by: Option<String>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                count: player_names.len(),
                minimum: MIN_PLAYERS,
            });
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: player_names.len(),
                maximum: MAX_PLAYERS,
            });
        }
        for (i, name) in player_names.iter().enumerate() {
            if player_names[..i].contains(name) {
                return Err(GameError::DuplicatePlayerName { name: name.clone() });
            }
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let roster = PlayerRoster::new(player_names, config.word);
        let deck = Deck::new_with_seed(config.catalog, seed);
        let mut turns = TurnManager::new(deck, config.leader_streak_cap);
        turns.deal_first_card();

        Ok(Self {
            roster,
            turns,
            game_started: true,
            is_game_over: false,
            winner: None,
            created_by,
            start_time: now_rfc3339(),
            end_time: None,
            seed,
        })
    }

    /// Applies one attempt outcome for the player on the clock.
    ///
    /// Fails once the match is over; callers should check
    /// [`is_game_over`](Self::is_game_over) before submitting. When this
    /// turn ends the match, the winner and end time are frozen here.
    pub fn process_turn(&mut self, result: AttemptResult) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameAlreadyOver);
        }

        self.turns.apply(result, &mut self.roster);

        if self.roster.check_game_over() {
            self.is_game_over = true;
            if self.winner.is_none() {
                self.winner = self.roster.winner();
                self.end_time = Some(now_rfc3339());
            }
        }
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner.clone()
    }

    /// Deck RNG seed for this match, for reproducing draw order.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The player currently on the clock, cloned.
    pub fn current_player(&self) -> Option<Player> {
        let id = match self.turns.phase() {
            TurnPhase::Leader => self.turns.leader_id(),
            TurnPhase::Follower => self.turns.follower_id()?,
        };
        self.roster.get(id).cloned()
    }

    /// Fresh snapshot of the whole match. Safe to hold, mutate, serialize.
    pub fn state(&self) -> GameSnapshot {
        GameSnapshot {
            game_started: self.game_started,
            players: self.roster.players(),
            current_card: self.turns.current_card().cloned(),
            turn_phase: self.turns.phase(),
            round: self.turns.round(),
            is_game_over: self.is_game_over,
            game_word: self.roster.word().as_string(),
            turns: self.turns.turns().to_vec(),
            current_leader_id: self.turns.leader_id(),
            current_follower_id: self.turns.follower_id(),
            winner: self.winner.clone(),
            active_players: self.roster.active_players().len(),
            created_by: self.created_by.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}
