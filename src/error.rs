use thiserror::Error;

/// Errors that can occur while setting up or running a game.
///
/// None of these are transient: each one means the game cannot continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("draw pile is empty and the discard pile has nothing to reshuffle")]
    EmptyDeck,
    #[error("hand index {index} is out of range for a hand of {len} cards")]
    InvalidHandState { index: usize, len: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("game is already over")]
    GameOver,
    #[error("turn limit reached after {turns} turns without a winner")]
    TurnLimitExceeded { turns: usize },
}
