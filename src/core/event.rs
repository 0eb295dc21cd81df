//! Game event history.
//!
//! Every state change the engine makes is appended to an [`EventLog`] as a
//! [`GameEvent`] tagged with a sequence number and the round it happened
//! in. The log is the replay/debug record of a game; the engine never
//! reads it back to make decisions.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Seat, TeamId};
use super::tile::Tile;

/// Which open end a tile was attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Why a bonus was paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// Final tile fit both ends.
    Capicua,
    /// Nobody could move.
    Block,
    /// Next seat had to pass right after the opening play.
    SecondPlayPass,
}

impl std::fmt::Display for BonusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BonusKind::Capicua => write!(f, "capicua"),
            BonusKind::Block => write!(f, "block"),
            BonusKind::SecondPlayPass => write!(f, "second-play pass"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh hands dealt.
    RoundDealt(u32),
    /// First tile placed on an empty table.
    Opened(Seat, Tile),
    Played(Seat, Tile, Side),
    Passed(Seat),
    BonusAwarded(TeamId, BonusKind, i64),
    /// A bonus applied but would have reached the cap.
    BonusWithheld(TeamId, BonusKind, i64),
    /// Remaining pips credited to a team at the end of a hand.
    PipsTallied(Seat, TeamId, i64),
    Blocked(Seat),
    GameWon(TeamId),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::RoundDealt(round) => write!(f, "Round {round} dealt"),
            GameEvent::Opened(seat, tile) => write!(f, "{seat} opens with {tile}"),
            GameEvent::Played(seat, tile, side) => write!(f, "{seat} plays {tile} on the {side}"),
            GameEvent::Passed(seat) => write!(f, "{seat} passes"),
            GameEvent::BonusAwarded(team, kind, points) => {
                write!(f, "{team} receives {points} for {kind}")
            }
            GameEvent::BonusWithheld(team, kind, points) => {
                write!(f, "{team} {kind} bonus of {points} withheld at the cap")
            }
            GameEvent::PipsTallied(seat, team, pips) => {
                write!(f, "{seat} holds {pips} pips, credited to {team}")
            }
            GameEvent::Blocked(seat) => write!(f, "Board blocked after {seat} played"),
            GameEvent::GameWon(team) => write!(f, "{team} wins the game"),
        }
    }
}

/// A logged event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 1.
    pub sequence: u32,
    /// Round the event belongs to (first round is 1).
    pub round: u32,
    pub event: GameEvent,
}

/// Append-only event history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    records: Vector<EventRecord>,
    last_sequence: u32,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: u32, event: GameEvent) {
        self.last_sequence += 1;
        self.records.push_back(EventRecord {
            sequence: self.last_sequence,
            round,
            event,
        });
    }

    /// Records after `sequence`, oldest first.
    pub fn since(&self, sequence: u32) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter().skip_while(move |r| r.sequence <= sequence)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.last_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sequence() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(1, GameEvent::RoundDealt(1));
        log.push(1, GameEvent::Opened(Seat::new(2), Tile::DOUBLE_SIX));
        log.push(1, GameEvent::Passed(Seat::new(3)));

        assert_eq!(log.len(), 3);
        assert_eq!(log.last().unwrap().sequence, 3);

        let later: Vec<_> = log.since(1).map(|r| r.sequence).collect();
        assert_eq!(later, vec![2, 3]);
    }

    #[test]
    fn test_clear_restarts_sequence() {
        let mut log = EventLog::new();
        log.push(1, GameEvent::RoundDealt(1));
        log.clear();
        log.push(1, GameEvent::RoundDealt(1));
        assert_eq!(log.last().unwrap().sequence, 1);
    }

    #[test]
    fn test_event_display() {
        let tile = Tile::new(6, 5).unwrap();
        assert_eq!(
            GameEvent::Played(Seat::new(1), tile, Side::Left).to_string(),
            "Seat 1 plays [6|5] on the left"
        );
        assert_eq!(
            GameEvent::BonusAwarded(TeamId::B, BonusKind::Block, 30).to_string(),
            "Team B receives 30 for block"
        );
        assert_eq!(GameEvent::GameWon(TeamId::A).to_string(), "Team A wins the game");
    }

    #[test]
    fn test_event_serialization() {
        let record = EventRecord {
            sequence: 4,
            round: 2,
            event: GameEvent::PipsTallied(Seat::new(0), TeamId::A, 17),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
