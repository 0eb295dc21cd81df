//! Game configuration.
//!
//! A game is configured once at construction with the two team names, the
//! score cap that ends the game, the flat bonus size, and what happens when
//! the board blocks.

use serde::{Deserialize, Serialize};

use super::error::{DominoError, Result};
use super::player::TeamId;

/// Default score that wins the game.
pub const DEFAULT_SCORE_CAP: i64 = 200;

/// Default flat bonus (capicua, block, second-play passing unit).
pub const DEFAULT_BONUS: i64 = 30;

/// What the engine does after awarding the block bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockPolicy {
    /// Leave the blocked board in place until the caller starts a new round.
    #[default]
    Hold,
    /// Tally remaining pips and deal a new round immediately, as after a
    /// hand is emptied.
    TallyAndReset,
}

/// Complete game configuration.
///
/// ```
/// use dominican_domino::core::{BlockPolicy, GameConfig};
///
/// let config = GameConfig::new()
///     .with_team_names("Los Primos", "La Casa")
///     .with_score_cap(150)
///     .with_block_policy(BlockPolicy::TallyAndReset);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.score_cap, 150);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names for team A and team B.
    pub team_names: [String; 2],

    /// A team reaching or passing this total wins.
    pub score_cap: i64,

    /// Flat bonus for capicua and block; per-pip unit for the passing bonus.
    pub bonus: i64,

    /// Behavior after a block.
    pub block_policy: BlockPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            team_names: ["Team A".to_string(), "Team B".to_string()],
            score_cap: DEFAULT_SCORE_CAP,
            bonus: DEFAULT_BONUS,
            block_policy: BlockPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both team names.
    #[must_use]
    pub fn with_team_names(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.team_names = [a.into(), b.into()];
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_cap(mut self, cap: i64) -> Self {
        self.score_cap = cap;
        self
    }

    /// Set the flat bonus size.
    #[must_use]
    pub fn with_bonus(mut self, bonus: i64) -> Self {
        self.bonus = bonus;
        self
    }

    /// Set the block policy.
    #[must_use]
    pub fn with_block_policy(mut self, policy: BlockPolicy) -> Self {
        self.block_policy = policy;
        self
    }

    /// Name of a team.
    #[must_use]
    pub fn team_name(&self, team: TeamId) -> &str {
        &self.team_names[team.index()]
    }

    /// Reject configurations the engine cannot play with.
    pub fn validate(&self) -> Result<()> {
        if self.team_names.iter().any(|n| n.trim().is_empty()) {
            return Err(DominoError::InvalidConfig("team names must not be empty".into()));
        }
        if self.score_cap <= 0 {
            return Err(DominoError::InvalidConfig(format!(
                "score cap must be positive, got {}",
                self.score_cap
            )));
        }
        if self.bonus <= 0 {
            return Err(DominoError::InvalidConfig(format!(
                "bonus must be positive, got {}",
                self.bonus
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.score_cap, 200);
        assert_eq!(config.bonus, 30);
        assert_eq!(config.block_policy, BlockPolicy::Hold);
        assert_eq!(config.team_name(TeamId::A), "Team A");
        assert_eq!(config.team_name(TeamId::B), "Team B");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_team_names("Norte", "Sur")
            .with_score_cap(100)
            .with_bonus(25)
            .with_block_policy(BlockPolicy::TallyAndReset);

        assert_eq!(config.team_name(TeamId::A), "Norte");
        assert_eq!(config.team_name(TeamId::B), "Sur");
        assert_eq!(config.score_cap, 100);
        assert_eq!(config.bonus, 25);
        assert_eq!(config.block_policy, BlockPolicy::TallyAndReset);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty_name = GameConfig::new().with_team_names("", "Sur");
        assert!(matches!(empty_name.validate(), Err(DominoError::InvalidConfig(_))));

        let zero_cap = GameConfig::new().with_score_cap(0);
        assert!(zero_cap.validate().is_err());

        let negative_bonus = GameConfig::new().with_bonus(-5);
        assert!(negative_bonus.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_block_policy(BlockPolicy::TallyAndReset);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
