use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board width and height must be at least 1")]
    InvalidDimension,
    #[error("Mine count {mines} must be between 1 and {total} exclusive")]
    InvalidMineCount { mines: CellCount, total: CellCount },
    #[error("Cannot place {mines} mines outside the safe zone, only {available} tiles available")]
    InsufficientSpace {
        mines: CellCount,
        available: CellCount,
    },
    #[error("Coordinates {0:?} are outside the board")]
    OutOfBounds(Coord2),
    #[error("Tile at {0:?} is already revealed")]
    AlreadyRevealed(Coord2),
    #[error("Tile at {0:?} is flagged, remove the flag before revealing it")]
    Flagged(Coord2),
    #[error("Operation not valid in the current game state")]
    InvalidState,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
