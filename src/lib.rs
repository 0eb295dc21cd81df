//! # dominican-domino
//!
//! Rules engine for four-player partnered Dominican domino.
//!
//! Two teams of two hold seven tiles each from a double-six set and take
//! turns extending a shared line from either open end. The engine enforces
//! legality, detects the end of a hand (a seat runs out, or the board
//! blocks), pays bonuses, tallies team scores toward a capped target, and
//! advances turns.
//!
//! ## Design
//!
//! - **Single owner**: all state lives in one [`DominoGame`] value; there
//!   are no globals.
//! - **Injected dealing**: the engine never shuffles itself. A [`Dealer`]
//!   hands it a validated [`Deal`] at the start of every round, seeded
//!   ([`ShuffleDealer`]) or fixed ([`ScriptedDealer`]).
//! - **Refusals are not errors**: a tile that fits nowhere or fits two
//!   different ends comes back as a [`PlayOutcome`]; only API misuse and
//!   broken invariants produce a [`DominoError`].
//!
//! ## Modules
//!
//! - `core`: tiles, seats and teams, configuration, RNG, errors, events
//! - `deal`: deals and deal sources
//! - `table`: the line of played tiles and its open ends
//! - `scoring`: team ledgers and bonus/tally rules
//! - `rules`: the game engine

pub mod core;
pub mod deal;
pub mod table;
pub mod scoring;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BlockPolicy, DominoError, GameConfig, GameEvent, Result, Seat, SeatMap, Side, TeamId, Tile,
};

pub use crate::deal::{Deal, Dealer, Hand, ScriptedDealer, ShuffleDealer};

pub use crate::table::{Ends, Table};

pub use crate::scoring::{Team, TeamScores};

pub use crate::rules::{DominoGame, PlayOutcome, PublicState};
