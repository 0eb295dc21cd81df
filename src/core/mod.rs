//! Core types: tiles, seats and teams, configuration, RNG, errors, events.
//!
//! Nothing here knows about turn order or scoring policy; the engine in
//! [`crate::rules`] builds on these.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;

pub use tile::{full_deck, Tile, DECK_SIZE, MAX_PIP};
pub use player::{Seat, SeatMap, TeamId, SEAT_COUNT, SEAT_TEAMS};
pub use rng::{GameRng, GameRngState};
pub use config::{BlockPolicy, GameConfig, DEFAULT_BONUS, DEFAULT_SCORE_CAP};
pub use error::{DominoError, Result};
pub use event::{BonusKind, EventLog, EventRecord, GameEvent, Side};
