//! Seats, teams and per-seat storage.
//!
//! ## Seat
//!
//! One of the four fixed places at the table, `Seat(0)` to `Seat(3)`.
//! Play proceeds in increasing seat order and wraps around.
//!
//! ## TeamId
//!
//! Seats are partnered across the table. The seat→team mapping is an
//! explicit lookup table ([`SEAT_TEAMS`]) rather than arithmetic.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a domino table.
pub const SEAT_COUNT: usize = 4;

/// Seat identifier, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Create a seat. Indices wrap modulo 4.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index % SEAT_COUNT as u8)
    }

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// The partner across the table (two seats ahead).
    #[must_use]
    pub const fn partner(self) -> Self {
        Self::new(self.0 + 2)
    }

    /// The team this seat plays for.
    #[must_use]
    pub const fn team(self) -> TeamId {
        SEAT_TEAMS[self.0 as usize]
    }

    /// Iterate over all four seats in play order.
    ///
    /// ```
    /// use dominican_domino::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[3], Seat::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One of the two partnerships.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    A,
    B,
}

impl TeamId {
    /// Both teams, A first.
    pub const ALL: [TeamId; 2] = [TeamId::A, TeamId::B];

    /// Index into per-team arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamId::A => 0,
            TeamId::B => 1,
        }
    }

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamId::A => TeamId::B,
            TeamId::B => TeamId::A,
        }
    }

    /// Seats belonging to this team.
    pub fn seats(self) -> impl Iterator<Item = Seat> {
        Seat::all().filter(move |s| s.team() == self)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamId::A => write!(f, "Team A"),
            TeamId::B => write!(f, "Team B"),
        }
    }
}

/// Seat→team lookup: even seats play for A, odd seats for B.
pub const SEAT_TEAMS: [TeamId; SEAT_COUNT] = [TeamId::A, TeamId::B, TeamId::A, TeamId::B];

/// Per-seat data storage with O(1) access.
///
/// ```
/// use dominican_domino::core::{Seat, SeatMap};
///
/// let mut passes: SeatMap<u32> = SeatMap::with_value(0);
/// passes[Seat::new(1)] += 1;
/// assert_eq!(passes[Seat::new(1)], 1);
/// assert_eq!(passes[Seat::new(0)], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [
                factory(Seat(0)),
                factory(Seat(1)),
                factory(Seat(2)),
                factory(Seat(3)),
            ],
        }
    }

    /// Wrap an existing array, indexed by seat.
    #[must_use]
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Map every entry into a new `SeatMap`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap::new(|seat| f(self.get(seat)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
