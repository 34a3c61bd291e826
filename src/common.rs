//! Common types for Minesweeper: board errors, reveal results, game status.

use crate::bitgrid::BitGridError;

/// Outcome of a reveal that was accepted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealResult {
    /// Reveal landed on a safe cell; its connected region was exposed.
    Safe,
    /// Reveal detonated a mine; the game is lost.
    Detonated,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates are outside the grid bounds.
    OutOfRange,
    /// Operation violates a precondition, carrying a player-facing reason.
    InvalidOperation(&'static str),
    /// Construction-time configuration is invalid.
    ConfigurationError(&'static str),
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        match err {
            BitGridError::EmptyGrid { .. } => {
                BoardError::ConfigurationError("board dimensions must be positive")
            }
            BitGridError::IndexOutOfBounds { .. } => BoardError::OutOfRange,
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfRange => write!(f, "Coordinates are outside the field"),
            BoardError::InvalidOperation(reason) => write!(f, "{}", reason),
            BoardError::ConfigurationError(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for BoardError {}
