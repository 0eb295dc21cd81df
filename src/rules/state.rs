//! Observable game snapshot.

use serde::{Deserialize, Serialize};

use crate::core::player::{Seat, SeatMap, TeamId};
use crate::core::tile::Tile;
use crate::table::Ends;

/// Everything every player at the table can see.
///
/// Hands are reduced to their sizes; the tiles themselves stay private.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Round number, starting at 1.
    pub round: u32,

    /// Seat whose turn it is.
    pub current_player: Seat,

    /// Played tiles, left to right.
    pub table: Vec<Tile>,

    /// Open end numbers (`None` before the opening tile).
    pub ends: Option<Ends>,

    pub hand_sizes: SeatMap<usize>,

    /// Team totals, A then B.
    pub scores: [i64; 2],

    pub team_names: [String; 2],

    /// Set once a team reaches the cap.
    pub winner: Option<TeamId>,
}

impl PublicState {
    /// Total score of a team.
    #[must_use]
    pub fn score(&self, team: TeamId) -> i64 {
        self.scores[team.index()]
    }

    /// Tiles still held across all hands.
    #[must_use]
    pub fn tiles_in_hands(&self) -> usize {
        self.hand_sizes.values().sum()
    }
}
