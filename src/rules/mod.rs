//! The Dominican domino rules engine.
//!
//! `DominoGame` is the single owner of game state and the entry point for
//! callers (interactive loops, bots, test harnesses). `PlayOutcome` is the
//! closed set of answers to `play_tile`, and `PublicState` is the
//! serializable view shared by all seats.

mod engine;
mod outcome;
mod state;

pub use engine::DominoGame;
pub use outcome::PlayOutcome;
pub use state::PublicState;
