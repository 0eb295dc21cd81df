//! Team score ledgers.

use serde::{Deserialize, Serialize};

use crate::core::player::TeamId;

/// A partnership's name and its sequence of point deltas.
///
/// The total is always the sum of the deltas; nothing else is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    deltas: Vec<i64>,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deltas: Vec::new(),
        }
    }

    /// Current total score.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.deltas.iter().sum()
    }

    /// Every delta recorded this game, oldest first.
    #[must_use]
    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    pub fn push(&mut self, points: i64) {
        self.deltas.push(points);
    }

    pub fn clear(&mut self) {
        self.deltas.clear();
    }
}

/// Both teams, indexed by [`TeamId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScores {
    teams: [Team; 2],
}

impl TeamScores {
    #[must_use]
    pub fn new(names: &[String; 2]) -> Self {
        Self {
            teams: [Team::new(TeamId::A, &names[0]), Team::new(TeamId::B, &names[1])],
        }
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.index()]
    }

    #[must_use]
    pub fn total(&self, id: TeamId) -> i64 {
        self.team(id).total()
    }

    /// First team at or past `cap`, team A checked first.
    #[must_use]
    pub fn leader_at(&self, cap: i64) -> Option<TeamId> {
        TeamId::ALL.into_iter().find(|&id| self.total(id) >= cap)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Forget every delta (new game).
    pub fn clear(&mut self) {
        for team in &mut self.teams {
            team.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; 2] {
        ["Norte".to_string(), "Sur".to_string()]
    }

    #[test]
    fn test_total_is_sum_of_deltas() {
        let mut team = Team::new(TeamId::A, "Norte");
        assert_eq!(team.total(), 0);

        team.push(30);
        team.push(0);
        team.push(17);
        assert_eq!(team.total(), 47);
        assert_eq!(team.deltas(), &[30, 0, 17]);

        team.clear();
        assert_eq!(team.total(), 0);
    }

    #[test]
    fn test_team_scores_indexing() {
        let mut scores = TeamScores::new(&names());
        scores.team_mut(TeamId::B).push(12);

        assert_eq!(scores.total(TeamId::A), 0);
        assert_eq!(scores.total(TeamId::B), 12);
        assert_eq!(scores.team(TeamId::B).name, "Sur");
        assert_eq!(scores.iter().count(), 2);
    }

    #[test]
    fn test_leader_at_cap() {
        let mut scores = TeamScores::new(&names());
        assert_eq!(scores.leader_at(200), None);

        scores.team_mut(TeamId::B).push(200);
        assert_eq!(scores.leader_at(200), Some(TeamId::B));

        scores.clear();
        assert_eq!(scores.leader_at(200), None);
    }
}
