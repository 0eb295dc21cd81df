//! The line of played tiles and its two open ends.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{DominoError, Result};
use crate::core::event::Side;
use crate::core::tile::{Tile, DECK_SIZE};

/// Matching numbers at the two open ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ends {
    pub left: u8,
    pub right: u8,
}

impl Ends {
    /// Does the tile fit at either end?
    #[must_use]
    pub fn accepts(self, tile: Tile) -> bool {
        tile.has(self.left) || tile.has(self.right)
    }

    /// Matching number at one end.
    #[must_use]
    pub fn at(self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Ordered, double-ended line of played tiles.
///
/// The ends are `None` until the first tile is placed. After that the left
/// number is always the free pip of the leftmost tile (or the value of a
/// double), and likewise on the right.
///
/// ```
/// use dominican_domino::core::{Side, Tile};
/// use dominican_domino::table::Table;
///
/// let mut table = Table::new();
/// table.attach(Tile::DOUBLE_SIX, 6).unwrap();
/// assert_eq!(table.ends().unwrap().left, 6);
///
/// let side = table.attach(Tile::new(6, 5).unwrap(), 6).unwrap();
/// assert_eq!(side, Side::Left);
/// assert_eq!(table.ends().unwrap().left, 5);
/// assert_eq!(table.ends().unwrap().right, 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    tiles: Vector<Tile>,
    ends: Option<Ends>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Open end numbers, `None` while the table is empty.
    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        self.ends
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Tiles from left to right.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Snapshot of the line, left to right.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Tile> {
        self.tiles.iter().copied().collect()
    }

    /// Which end a tile would attach to when matched on `number`.
    ///
    /// Left is preferred when both ends carry `number`. `None` on an empty
    /// table. Fails when `number` is not on the tile, the tile is already
    /// down, or no end carries `number`.
    pub fn side_for(&self, tile: Tile, number: u8) -> Result<Option<Side>> {
        if !tile.has(number) {
            return Err(DominoError::WrongMatchingNumber { tile, number });
        }
        if self.contains(tile) {
            return Err(DominoError::AlreadyPlayed(tile));
        }
        match self.ends {
            None => Ok(None),
            Some(ends) if number == ends.left => Ok(Some(Side::Left)),
            Some(ends) if number == ends.right => Ok(Some(Side::Right)),
            Some(ends) => Err(DominoError::NoMatchingEnd {
                tile,
                left: ends.left,
                right: ends.right,
            }),
        }
    }

    /// Place a tile matched on `number` and update the ends.
    ///
    /// On an empty table the tile's pips (high, low) become (left, right).
    /// Returns the side the tile went to; the opening tile reports `Left`.
    pub fn attach(&mut self, tile: Tile, number: u8) -> Result<Side> {
        let side = self.side_for(tile, number)?;
        if self.tiles.len() >= DECK_SIZE {
            return Err(DominoError::InvariantViolation(format!(
                "table already holds {} tiles",
                self.tiles.len()
            )));
        }

        // other_pip cannot fail once side_for accepted the tile
        let free = tile.other_pip(number).unwrap_or(number);
        match side {
            None => {
                let (left, right) = tile.pips();
                self.tiles.push_back(tile);
                self.ends = Some(Ends { left, right });
                Ok(Side::Left)
            }
            Some(Side::Left) => {
                self.tiles.push_front(tile);
                if let Some(ends) = self.ends.as_mut() {
                    ends.left = free;
                }
                Ok(Side::Left)
            }
            Some(Side::Right) => {
                self.tiles.push_back(tile);
                if let Some(ends) = self.ends.as_mut() {
                    ends.right = free;
                }
                Ok(Side::Right)
            }
        }
    }

    /// Remove every tile and forget the ends.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.ends = None;
    }
}
