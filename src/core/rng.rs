//! Seeded deck shuffling.
//!
//! One seed fixes the whole sequence of deals for a game. A [`GameRngState`]
//! taken between rounds resumes that sequence exactly.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::tile::{full_deck, Tile};

/// ChaCha8 generator that shuffles double-six decks.
#[derive(Clone, Debug)]
pub struct GameRng {
    chacha: ChaCha8Rng,
    seed: u64,
    shuffles: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            chacha: ChaCha8Rng::seed_from_u64(seed),
            seed,
            shuffles: 0,
        }
    }

    /// Seed from the thread-local OS-backed generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Decks shuffled so far.
    #[must_use]
    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }

    /// A full 28-tile deck in random order.
    pub fn shuffled_deck(&mut self) -> Vec<Tile> {
        let mut deck = full_deck();
        deck.shuffle(&mut self.chacha);
        self.shuffles += 1;
        deck
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.chacha.get_word_pos(),
            shuffles: self.shuffles,
        }
    }

    /// Resume a generator captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut chacha = ChaCha8Rng::seed_from_u64(state.seed);
        chacha.set_word_pos(state.word_pos);
        Self {
            chacha,
            seed: state.seed,
            shuffles: state.shuffles,
        }
    }
}

/// Serializable position of a [`GameRng`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    pub shuffles: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_decks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..5 {
            assert_eq!(a.shuffled_deck(), b.shuffled_deck());
        }
        assert_eq!(a.shuffles(), 5);
    }

    #[test]
    fn test_seeds_differ() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        assert_ne!(a.shuffled_deck(), b.shuffled_deck());
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut deck = rng.shuffled_deck();
        assert_ne!(deck, full_deck());
        deck.sort_unstable();
        let mut sorted = full_deck();
        sorted.sort_unstable();
        assert_eq!(deck, sorted);
    }

    #[test]
    fn test_state_resumes_between_deals() {
        let mut rng = GameRng::new(42);
        rng.shuffled_deck();
        rng.shuffled_deck();

        let state = rng.state();
        let mut restored = GameRng::from_state(&state);
        assert_eq!(restored.seed(), 42);
        assert_eq!(restored.shuffles(), 2);
        assert_eq!(rng.shuffled_deck(), restored.shuffled_deck());
    }
}
