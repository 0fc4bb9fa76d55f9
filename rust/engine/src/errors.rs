use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("At least {minimum} players are required to start the game (got {count})")]
    NotEnoughPlayers { count: usize, minimum: usize },
    #[error("At most {maximum} players are supported (got {count})")]
    TooManyPlayers { count: usize, maximum: usize },
    #[error("Duplicate player name: {name}")]
    DuplicatePlayerName { name: String },
    #[error("The game is already over")]
    GameAlreadyOver,
}
