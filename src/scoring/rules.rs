//! Bonus and tally rules.
//!
//! Flat bonuses are all-or-nothing: a bonus that would bring the team to
//! the cap is withheld entirely. Pip tallies are never capped and are the
//! only way a team reaches the winning score.

use crate::core::player::{Seat, SeatMap};
use crate::core::tile::{pip_total, Tile};
use crate::deal::Hand;
use crate::table::Ends;

/// Would a bonus of `points` keep `total` strictly under `cap`?
#[must_use]
pub fn bonus_allowed(total: i64, points: i64, cap: i64) -> bool {
    total + points < cap
}

/// Is `tile` a capicua against the ends as they stand after it was played?
///
/// True when the tile carries both open numbers: a double closing two equal
/// ends, or a tile that could have gone on either side.
#[must_use]
pub fn is_capicua(tile: Tile, ends: Ends) -> bool {
    tile.has(ends.left) && tile.has(ends.right)
}

/// Points for the second-play passing bonus.
#[must_use]
pub fn passing_bonus(tile: Tile, unit: i64) -> i64 {
    unit * i64::from(tile.distinct_pips())
}

/// Remaining pips per seat.
#[must_use]
pub fn pip_counts(hands: &SeatMap<Hand>) -> SeatMap<i64> {
    hands.map(|hand| i64::from(pip_total(hand.iter())))
}

/// Can `seat` attach any of its tiles?
#[must_use]
pub fn can_move(hands: &SeatMap<Hand>, seat: Seat, ends: Ends) -> bool {
    hands[seat].iter().any(|&t| ends.accepts(t))
}

/// No seat can attach anything.
#[must_use]
pub fn is_blocked(hands: &SeatMap<Hand>, ends: Ends) -> bool {
    Seat::all().all(|seat| !can_move(hands, seat, ends))
}
