//! Engine errors.
//!
//! Errors are reserved for API misuse and broken invariants. Ordinary rule
//! refusals (a tile that fits nowhere, a tile that fits both ends) are
//! reported through [`PlayOutcome`](crate::rules::PlayOutcome) instead.

use super::player::Seat;
use super::tile::Tile;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DominoError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    #[error("pip value {0} is outside 0..=6")]
    InvalidPip(u8),
    #[error("wrong matching number {number} for tile {tile}")]
    WrongMatchingNumber { tile: Tile, number: u8 },
    #[error("tile {0} is already on the table")]
    AlreadyPlayed(Tile),
    #[error("tile {tile} does not match either open end ({left}, {right})")]
    NoMatchingEnd { tile: Tile, left: u8, right: u8 },
    #[error("tile {tile} is not in the hand of {seat}")]
    TileNotInHand { tile: Tile, seat: Seat },
    #[error("{0} holds a playable tile and cannot pass")]
    PassWithPlayableTile(Seat),
    #[error("the game is over")]
    GameOver,
    #[error("invalid deal: {0}")]
    InvalidDeal(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl DominoError {
    /// Is this a broken engine invariant rather than caller misuse?
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, DominoError::InvariantViolation(_))
    }
}
