//! The shared line of played tiles.
//!
//! `Table` owns the ordered tiles and the two matching numbers. It enforces
//! the structural rules of attaching a tile (matching number on the tile,
//! no replays, end selection, double handling) but knows nothing about
//! hands, turns or scoring.

mod line;

pub use line::{Ends, Table};
