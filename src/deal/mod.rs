//! Dealing tiles to the four seats.
//!
//! The engine never shuffles on its own. It asks an injected [`Dealer`] for
//! a [`Deal`] at the start of every round:
//!
//! - [`ShuffleDealer`]: seeded random deals (ChaCha8)
//! - [`ScriptedDealer`]: fixed deals for tests and replays

mod dealer;

pub use dealer::{Deal, Dealer, Hand, ScriptedDealer, ShuffleDealer, HAND_SIZE};
