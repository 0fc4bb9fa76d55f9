//! # grind-engine: G.R.I.N.D Game Core
//!
//! A deterministic rules engine for G.R.I.N.D, a S.K.A.T.E.-style trick
//! battle: a leader sets a trick, everyone else has to match it, and failed
//! attempts collect letters until a player spells the elimination word and
//! is out. Last skater standing wins.
//!
//! The engine is pure in-memory state driven by a single caller, one
//! attempt at a time. No networking, no persistence, no UI concerns; those
//! layers consume the serializable snapshots this crate produces.
//!
//! ## Core Modules
//!
//! - [`cards`] - Trick card catalog (name, difficulty, points)
//! - [`deck`] - Random draws with reshuffle policy and ChaCha20 RNG
//! - [`player`] - Player roster and letter-elimination bookkeeping
//! - [`turn`] - Leader/follower turn state machine
//! - [`game`] - Match facade: configuration, turn processing, snapshots
//! - [`logger`] - Finished-game records and JSONL history logging
//! - [`errors`] - Error types for match setup and turn submission
//!
//! ## Quick Start
//!
//! ```rust
//! use grind_engine::game::Game;
//! use grind_engine::turn::AttemptResult;
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! let mut game = Game::new(&names, None).expect("two players is enough");
//!
//! // Alice leads and bails; she picks up a "G" and Bob takes over
//! game.process_turn(AttemptResult::Failed).unwrap();
//!
//! let state = game.state();
//! assert_eq!(state.players[0].letters, vec!['G']);
//! assert_eq!(state.round, 1);
//! ```
//!
//! ## Deterministic Draws
//!
//! Deck order is reproducible with a seeded config:
//!
//! ```rust
//! use grind_engine::game::{Game, GameConfig};
//!
//! let names = vec!["Alice".to_string(), "Bob".to_string()];
//! let config = GameConfig { seed: Some(42), ..GameConfig::default() };
//! let game1 = Game::with_config(&names, None, config.clone()).unwrap();
//! let game2 = Game::with_config(&names, None, config).unwrap();
//! assert_eq!(game1.state().current_card, game2.state().current_card);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod turn;
