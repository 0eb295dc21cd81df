//! The game engine.
//!
//! `DominoGame` owns the whole game: hands, table, turn, team ledgers and
//! the event log. Callers drive it one call at a time:
//!
//! 1. `start()` on an empty table plays the double six from its holder.
//! 2. `play_tile()` offers a tile from the current seat's hand.
//! 3. `force_pass()` skips a seat with no legal tile.
//! 4. `new_round()` restarts a blocked board.
//!
//! After every successful play the engine resolves, in order: hand won,
//! block, second-play passing bonus, and otherwise moves to the next seat.

use log::{debug, info, warn};

use crate::core::config::{BlockPolicy, GameConfig};
use crate::core::error::{DominoError, Result};
use crate::core::event::{BonusKind, EventLog, GameEvent};
use crate::core::player::{Seat, SeatMap, TeamId};
use crate::core::tile::{Tile, MAX_PIP};
use crate::deal::{Dealer, Hand, ShuffleDealer, HAND_SIZE};
use crate::scoring::{rules, Team, TeamScores};
use crate::table::{Ends, Table};

use super::outcome::PlayOutcome;
use super::state::PublicState;

/// Four-seat partnered domino game.
///
/// ## Example
///
/// ```
/// use dominican_domino::core::Tile;
/// use dominican_domino::rules::{DominoGame, PlayOutcome};
///
/// let mut game = DominoGame::seeded(42);
/// game.start().unwrap();
/// assert_eq!(game.table(), vec![Tile::DOUBLE_SIX]);
///
/// // Drive one turn the way an interactive loop would
/// match game.allowed_tiles_of_current_player().first() {
///     Some(&tile) => {
///         let outcome = game.play_tile(tile, None).unwrap();
///         assert_ne!(outcome, PlayOutcome::Invalid);
///     }
///     None => game.force_pass().unwrap(),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DominoGame<D: Dealer = ShuffleDealer> {
    config: GameConfig,
    dealer: D,
    table: Table,
    hands: SeatMap<Hand>,
    current: Seat,
    scores: TeamScores,
    round: u32,
    winner: Option<TeamId>,
    events: EventLog,
}

impl DominoGame<ShuffleDealer> {
    /// Default configuration with seeded random deals.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::build(GameConfig::default(), ShuffleDealer::new(seed))
    }
}

impl<D: Dealer> DominoGame<D> {
    /// Create a game and deal the first round.
    pub fn new(config: GameConfig, dealer: D) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, dealer))
    }

    fn build(config: GameConfig, dealer: D) -> Self {
        let scores = TeamScores::new(&config.team_names);
        let mut game = Self {
            config,
            dealer,
            table: Table::new(),
            hands: SeatMap::with_value(Hand::new()),
            current: Seat::default(),
            scores,
            round: 0,
            winner: None,
            events: EventLog::new(),
        };
        game.deal_round();
        game
    }

    // === Turn operations ===

    /// Open the round with the double six.
    ///
    /// Does nothing if a tile is already on the table.
    pub fn start(&mut self) -> Result<()> {
        if !self.table.is_empty() {
            return Ok(());
        }
        if self.winner.is_some() {
            return Err(DominoError::GameOver);
        }
        let opener = Seat::all()
            .find(|&seat| self.hands[seat].contains(&Tile::DOUBLE_SIX))
            .ok_or_else(|| {
                DominoError::InvariantViolation("no seat holds the double six".into())
            })?;
        self.current = opener;
        self.play(Tile::DOUBLE_SIX, MAX_PIP)
    }

    /// Offer a tile from the current seat's hand.
    ///
    /// With `matching_number` the tile goes to the end carrying that number.
    /// Without it the engine picks the end, refusing with
    /// [`PlayOutcome::AmbiguousPlay`] when the tile fits two different ends
    /// and with [`PlayOutcome::Invalid`] when it fits none. Refusals leave
    /// the game untouched.
    pub fn play_tile(&mut self, tile: Tile, matching_number: Option<u8>) -> Result<PlayOutcome> {
        if self.winner.is_some() {
            return Err(DominoError::GameOver);
        }

        match matching_number {
            Some(number) => self.play(tile, number)?,
            None => {
                let Some(ends) = self.table.ends() else {
                    return Ok(PlayOutcome::Invalid);
                };
                let fits_left = tile.has(ends.left);
                let fits_right = tile.has(ends.right);
                if fits_left && fits_right && ends.left != ends.right {
                    return Ok(PlayOutcome::AmbiguousPlay);
                }
                if fits_left {
                    self.play(tile, ends.left)?;
                } else if fits_right {
                    self.play(tile, ends.right)?;
                } else {
                    return Ok(PlayOutcome::Invalid);
                }
            }
        }

        Ok(self.escalated_outcome())
    }

    /// Skip the current seat. Only allowed when it has no legal tile.
    pub fn force_pass(&mut self) -> Result<()> {
        if self.winner.is_some() {
            return Err(DominoError::GameOver);
        }
        let seat = self.current;
        if !self.allowed_tiles_of_current_player().is_empty() {
            warn!("{seat} tried to pass while holding a playable tile");
            return Err(DominoError::PassWithPlayableTile(seat));
        }
        debug!("{seat} passes");
        self.events.push(self.round, GameEvent::Passed(seat));
        self.current = seat.next();
        Ok(())
    }

    /// Deal a fresh round, keeping the scores. Used to restart after a block.
    pub fn new_round(&mut self) -> Result<()> {
        if self.winner.is_some() {
            return Err(DominoError::GameOver);
        }
        self.deal_round();
        Ok(())
    }

    /// Forget all scores and history and deal a fresh first round.
    pub fn new_game(&mut self) {
        self.scores.clear();
        self.winner = None;
        self.events.clear();
        self.round = 0;
        self.current = Seat::default();
        self.deal_round();
    }

    // === Internals ===

    fn play(&mut self, tile: Tile, number: u8) -> Result<()> {
        if self.winner.is_some() {
            return Err(DominoError::GameOver);
        }
        let seat = self.current;

        // All checks happen before anything is touched
        self.table.side_for(tile, number)?;
        let position = self.hands[seat]
            .iter()
            .position(|&t| t == tile)
            .ok_or(DominoError::TileNotInHand { tile, seat })?;

        let opening = self.table.is_empty();
        let before = self.hands[seat].len();
        let side = self.table.attach(tile, number)?;
        self.hands[seat].remove(position);
        if self.hands[seat].len() + 1 != before {
            return Err(DominoError::InvariantViolation(format!(
                "hand of {seat} went from {before} to {} tiles",
                self.hands[seat].len()
            )));
        }

        let event = if opening {
            GameEvent::Opened(seat, tile)
        } else {
            GameEvent::Played(seat, tile, side)
        };
        debug!("{event}");
        self.events.push(self.round, event);

        self.resolve_after_play(seat, tile)
    }

    fn resolve_after_play(&mut self, seat: Seat, tile: Tile) -> Result<()> {
        let ends = self.table.ends().ok_or_else(|| {
            DominoError::InvariantViolation("table has no open ends after a play".into())
        })?;
        let team = seat.team();

        if self.hands[seat].is_empty() {
            if rules::is_capicua(tile, ends) {
                self.award_bonus(team, BonusKind::Capicua, self.config.bonus);
            }
            self.finish_hand();
            return Ok(());
        }

        if rules::is_blocked(&self.hands, ends) {
            info!("board blocked after {seat} played {tile}");
            self.events.push(self.round, GameEvent::Blocked(seat));
            self.award_bonus(team, BonusKind::Block, self.config.bonus);
            if self.config.block_policy == BlockPolicy::TallyAndReset {
                self.finish_hand();
            }
            return Ok(());
        }

        if self.is_first_play_of_round(seat) {
            let next = seat.next();
            if !rules::can_move(&self.hands, next, ends)
                && rules::can_move(&self.hands, next.partner(), ends)
            {
                let points = rules::passing_bonus(tile, self.config.bonus);
                self.award_bonus(team, BonusKind::SecondPlayPass, points);
                return Ok(());
            }
        }

        self.current = seat.next();
        Ok(())
    }

    /// The seat just made the round's first play.
    fn is_first_play_of_round(&self, seat: Seat) -> bool {
        self.hands[seat].len() == HAND_SIZE - 1
            && self
                .hands
                .iter()
                .all(|(s, hand)| s == seat || hand.len() == HAND_SIZE)
    }

    /// Pay a flat bonus unless it would bring the team to the cap.
    fn award_bonus(&mut self, team: TeamId, kind: BonusKind, points: i64) {
        let total = self.scores.total(team);
        let event = if rules::bonus_allowed(total, points, self.config.score_cap) {
            self.scores.team_mut(team).push(points);
            GameEvent::BonusAwarded(team, kind, points)
        } else {
            GameEvent::BonusWithheld(team, kind, points)
        };
        info!("{event}");
        self.events.push(self.round, event);
    }

    /// Credit every hand's remaining pips to its owner's team, check for a
    /// winner, and deal the next round.
    fn finish_hand(&mut self) {
        let counts = rules::pip_counts(&self.hands);
        for (seat, &pips) in counts.iter() {
            let team = seat.team();
            self.scores.team_mut(team).push(pips);
            self.events.push(self.round, GameEvent::PipsTallied(seat, team, pips));
        }
        info!(
            "round {} over: {} {}, {} {}",
            self.round,
            self.scores.team(TeamId::A).name,
            self.scores.total(TeamId::A),
            self.scores.team(TeamId::B).name,
            self.scores.total(TeamId::B)
        );

        if let Some(team) = self.scores.leader_at(self.config.score_cap) {
            info!("{} wins the game", self.config.team_name(team));
            self.winner = Some(team);
            self.events.push(self.round, GameEvent::GameWon(team));
        }

        self.deal_round();
    }

    fn deal_round(&mut self) {
        let deal = self.dealer.deal();
        self.hands = deal.into_hands();
        self.table.clear();
        self.round += 1;
        debug!("round {} dealt", self.round);
        self.events.push(self.round, GameEvent::RoundDealt(self.round));
    }

    fn escalated_outcome(&self) -> PlayOutcome {
        if self.winner.is_some() {
            PlayOutcome::WonGame
        } else if self.hands.values().all(|hand| hand.len() == HAND_SIZE) {
            PlayOutcome::WonHand
        } else {
            PlayOutcome::Ok
        }
    }

    // === Queries ===

    /// Played tiles, left to right.
    #[must_use]
    pub fn table(&self) -> Vec<Tile> {
        self.table.to_vec()
    }

    /// Open end numbers, `None` before the opening tile.
    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        self.table.ends()
    }

    /// Tiles in the current hand that fit an open end.
    #[must_use]
    pub fn allowed_tiles_of_current_player(&self) -> Vec<Tile> {
        match self.table.ends() {
            Some(ends) => self
                .current_hand()
                .iter()
                .copied()
                .filter(|&t| ends.accepts(t))
                .collect(),
            None => Vec::new(),
        }
    }

    #[must_use]
    pub fn current_hand(&self) -> &[Tile] {
        &self.hands[self.current]
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        &self.hands[seat]
    }

    #[must_use]
    pub fn hand_sizes(&self) -> SeatMap<usize> {
        self.hands.map(|hand| hand.len())
    }

    #[must_use]
    pub fn current_player(&self) -> Seat {
        self.current
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current.team()
    }

    #[must_use]
    pub fn current_team_name(&self) -> &str {
        self.config.team_name(self.current.team())
    }

    #[must_use]
    pub fn team_name(&self, team: TeamId) -> &str {
        self.config.team_name(team)
    }

    #[must_use]
    pub fn team_score(&self, team: TeamId) -> i64 {
        self.scores.total(team)
    }

    #[must_use]
    pub fn team_deltas(&self, team: TeamId) -> &[i64] {
        self.scores.team(team).deltas()
    }

    #[must_use]
    pub fn team(&self, team: TeamId) -> &Team {
        self.scores.team(team)
    }

    /// No seat can attach a tile to the current board.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.table
            .ends()
            .is_some_and(|ends| rules::is_blocked(&self.hands, ends))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    /// Current round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dealer(&self) -> &D {
        &self.dealer
    }

    /// Snapshot of everything visible to all seats.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            round: self.round,
            current_player: self.current,
            table: self.table.to_vec(),
            ends: self.table.ends(),
            hand_sizes: self.hand_sizes(),
            scores: [self.scores.total(TeamId::A), self.scores.total(TeamId::B)],
            team_names: self.config.team_names.clone(),
            winner: self.winner,
        }
    }
}
