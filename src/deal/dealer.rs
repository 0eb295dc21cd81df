//! Deals and the sources that produce them.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::error::{DominoError, Result};
use crate::core::player::{SeatMap, SEAT_COUNT};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::tile::{Tile, DECK_SIZE};

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// A seat's tiles. Never grows past the deal.
pub type Hand = SmallVec<[Tile; HAND_SIZE]>;

/// A partition of the full deck into four hands of seven.
///
/// The only way to build a `Deal` is through [`Deal::new`], which checks
/// that every tile of the double-six set appears exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    hands: SeatMap<Hand>,
}

impl Deal {
    /// Validate and wrap four hands, indexed by seat.
    pub fn new(hands: [Vec<Tile>; SEAT_COUNT]) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for (seat, hand) in hands.iter().enumerate() {
            if hand.len() != HAND_SIZE {
                return Err(DominoError::InvalidDeal(format!(
                    "seat {} has {} tiles, expected {}",
                    seat,
                    hand.len(),
                    HAND_SIZE
                )));
            }
            for &tile in hand {
                if !seen.insert(tile) {
                    return Err(DominoError::InvalidDeal(format!("tile {tile} dealt twice")));
                }
            }
        }
        debug_assert_eq!(seen.len(), DECK_SIZE);

        let [h0, h1, h2, h3] = hands;
        Ok(Self {
            hands: SeatMap::from_array([
                Hand::from_vec(h0),
                Hand::from_vec(h1),
                Hand::from_vec(h2),
                Hand::from_vec(h3),
            ]),
        })
    }

    /// Split a full shuffled deck into consecutive runs of seven.
    pub fn from_deck(deck: &[Tile]) -> Result<Self> {
        if deck.len() != DECK_SIZE {
            return Err(DominoError::InvalidDeal(format!(
                "deck has {} tiles, expected {}",
                deck.len(),
                DECK_SIZE
            )));
        }
        let mut chunks = deck.chunks(HAND_SIZE).map(<[Tile]>::to_vec);
        let mut next = || chunks.next().unwrap_or_default();
        Self::new([next(), next(), next(), next()])
    }

    /// The hands, indexed by seat.
    #[must_use]
    pub fn hands(&self) -> &SeatMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn into_hands(self) -> SeatMap<Hand> {
        self.hands
    }
}

/// Source of fresh deals, called once per round.
pub trait Dealer {
    fn deal(&mut self) -> Deal;
}

/// Deals by shuffling the deck with a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct ShuffleDealer {
    rng: GameRng,
}

impl ShuffleDealer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume from a saved generator state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Dealer for ShuffleDealer {
    fn deal(&mut self) -> Deal {
        let deck = self.rng.shuffled_deck();
        let [h0, h1, h2, h3]: [Vec<Tile>; SEAT_COUNT] =
            std::array::from_fn(|seat| deck[seat * HAND_SIZE..(seat + 1) * HAND_SIZE].to_vec());
        Deal {
            hands: SeatMap::from_array([
                Hand::from_vec(h0),
                Hand::from_vec(h1),
                Hand::from_vec(h2),
                Hand::from_vec(h3),
            ]),
        }
    }
}

/// Replays a fixed sequence of deals, then repeats the last one.
///
/// Useful for driving the engine into exact positions.
#[derive(Clone, Debug)]
pub struct ScriptedDealer {
    queue: VecDeque<Deal>,
    last: Deal,
}

impl ScriptedDealer {
    /// Build from at least one deal.
    pub fn new(deals: impl IntoIterator<Item = Deal>) -> Result<Self> {
        let queue: VecDeque<Deal> = deals.into_iter().collect();
        let last = queue
            .back()
            .cloned()
            .ok_or_else(|| DominoError::InvalidDeal("scripted dealer needs at least one deal".into()))?;
        Ok(Self { queue, last })
    }

    /// Number of scripted deals not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Dealer for ScriptedDealer {
    fn deal(&mut self) -> Deal {
        self.queue.pop_front().unwrap_or_else(|| self.last.clone())
    }
}

impl<D: Dealer + ?Sized> Dealer for Box<D> {
    fn deal(&mut self) -> Deal {
        (**self).deal()
    }
}
