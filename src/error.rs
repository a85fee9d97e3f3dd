use thiserror::Error;

use crate::core::PlayerId;

/// Errors surfaced to the host driving a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A game needs {min} to {max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("The game is already over, {winner} won")]
    GameOver { winner: PlayerId },

    #[error("Turn order is still being revealed")]
    RevealPending,

    #[error("No game is in progress")]
    NoGameInProgress,

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, GameError>;
