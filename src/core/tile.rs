//! Domino tiles and the double-six deck.
//!
//! A tile is an unordered pair of pips in `0..=6`. Tiles are stored
//! normalized with the high pip first, so `Tile::new(2, 5)` and
//! `Tile::new(5, 2)` are the same tile.

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Result};

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in a double-six set.
pub const DECK_SIZE: usize = 28;

/// A single domino tile.
///
/// ```
/// use dominican_domino::core::Tile;
///
/// let tile = Tile::new(2, 5).unwrap();
/// assert_eq!(tile.pips(), (5, 2));
/// assert_eq!(tile, Tile::new(5, 2).unwrap());
/// assert!(tile.has(2));
/// assert_eq!(tile.other_pip(5), Some(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    high: u8,
    low: u8,
}

impl Tile {
    /// The double-six, which opens the first round of a game.
    pub const DOUBLE_SIX: Tile = Tile { high: 6, low: 6 };

    /// Create a tile from two pips in any order.
    pub fn new(a: u8, b: u8) -> Result<Self> {
        if a > MAX_PIP {
            return Err(DominoError::InvalidPip(a));
        }
        if b > MAX_PIP {
            return Err(DominoError::InvalidPip(b));
        }
        Ok(if a >= b {
            Self { high: a, low: b }
        } else {
            Self { high: b, low: a }
        })
    }

    /// Both pips, high first.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.high, self.low)
    }

    /// Is this a double (both pips equal)?
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.high == self.low
    }

    /// Does this tile carry the given pip value?
    #[must_use]
    pub const fn has(self, pip: u8) -> bool {
        self.high == pip || self.low == pip
    }

    /// The pip left over after matching `pip`.
    ///
    /// For a double this is the same value. `None` if the tile does not
    /// carry `pip` at all.
    #[must_use]
    pub const fn other_pip(self, pip: u8) -> Option<u8> {
        if self.high == pip {
            Some(self.low)
        } else if self.low == pip {
            Some(self.high)
        } else {
            None
        }
    }

    /// Sum of both pips.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.high as u32 + self.low as u32
    }

    /// Number of distinct pip values on the tile (1 for doubles, else 2).
    #[must_use]
    pub const fn distinct_pips(self) -> u32 {
        if self.is_double() {
            1
        } else {
            2
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.high, self.low)
    }
}

/// The full 28-tile double-six deck in canonical order.
#[must_use]
pub fn full_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for high in 0..=MAX_PIP {
        for low in 0..=high {
            deck.push(Tile { high, low });
        }
    }
    deck
}

/// Sum of pips over a set of tiles.
pub fn pip_total<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> u32 {
    tiles.into_iter().map(|t| t.pip_sum()).sum()
}
