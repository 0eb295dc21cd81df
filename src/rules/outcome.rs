//! Result of a `play_tile` call.

use serde::{Deserialize, Serialize};

/// What happened when a tile was offered to the engine.
///
/// `Invalid` and `AmbiguousPlay` are refusals: the engine state is exactly
/// as it was before the call. The other three mean the tile was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Tile played, the game goes on.
    Ok,
    /// Tile fits neither open end.
    Invalid,
    /// Tile fits both ends with different numbers; ask again with a side.
    AmbiguousPlay,
    /// Tile played and the hand ended; a new round has been dealt.
    WonHand,
    /// Tile played and a team reached the score cap.
    WonGame,
}

impl PlayOutcome {
    /// Was the tile actually played?
    #[must_use]
    pub fn is_played(self) -> bool {
        matches!(self, PlayOutcome::Ok | PlayOutcome::WonHand | PlayOutcome::WonGame)
    }

    /// Did the engine refuse the tile without touching state?
    #[must_use]
    pub fn is_refusal(self) -> bool {
        !self.is_played()
    }
}

impl std::fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlayOutcome::Ok => "OK",
            PlayOutcome::Invalid => "INVALID",
            PlayOutcome::AmbiguousPlay => "AMBIGUOUS_PLAY",
            PlayOutcome::WonHand => "WON_HAND",
            PlayOutcome::WonGame => "WON_GAME",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_played_vs_refusal() {
        assert!(PlayOutcome::Ok.is_played());
        assert!(PlayOutcome::WonHand.is_played());
        assert!(PlayOutcome::WonGame.is_played());
        assert!(PlayOutcome::Invalid.is_refusal());
        assert!(PlayOutcome::AmbiguousPlay.is_refusal());
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayOutcome::AmbiguousPlay.to_string(), "AMBIGUOUS_PLAY");
        assert_eq!(PlayOutcome::WonGame.to_string(), "WON_GAME");
    }
}
