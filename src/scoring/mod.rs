//! Team scoring.
//!
//! - `Team` / `TeamScores`: per-team delta sequences and totals
//! - `rules`: capped bonuses, capicua and block detection, pip tallies

pub mod rules;
mod team;

pub use team::{Team, TeamScores};
