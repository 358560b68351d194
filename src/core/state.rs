//! Game state: roster, turn order and final-round tracking.
//!
//! ## GameState
//!
//! The single owned engine for one table. It holds:
//! - The roster in turn order (`im::Vector`, so snapshots clone in O(1))
//! - The index of the seat whose turn it is
//! - The final-round record, once someone crosses the winning score
//! - The winner, once decided
//! - A change log for presentation layers
//!
//! All commands are total. Unknown ids and out-of-range positions are ignored
//! rather than reported, so a caller holding stale data cannot corrupt state.

use std::collections::VecDeque;

use im::Vector;
use log::{debug, info};
use smallvec::SmallVec;

use super::config::FarkleConfig;
use super::event::{ChangeLog, GameEvent};
use super::player::{Player, PlayerId, PlayerIdAllocator};
use super::snapshot::GameSnapshot;
use crate::rules::{self, FinalRound};

/// Score tracker state for one game.
#[derive(Clone, Debug, Default)]
pub struct GameState {
    config: FarkleConfig,

    /// Roster in turn order.
    players: Vector<Player>,

    /// Seat whose turn it is. 0 when the roster is empty.
    current_turn_index: usize,

    /// Set once per game, when the first player reaches the winning score.
    final_round: Option<FinalRound>,

    /// Terminal until `reset_game`.
    winner: Option<PlayerId>,

    ids: PlayerIdAllocator,

    changes: ChangeLog,
}

impl GameState {
    /// Create an empty game with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty game with custom rules.
    #[must_use]
    pub fn with_config(config: FarkleConfig) -> Self {
        Self {
            changes: ChangeLog::with_limit(config.max_pending_events),
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &FarkleConfig {
        &self.config
    }

    // === Roster ===

    /// Append a player to the end of the turn order.
    ///
    /// The current turn index is unaffected.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.ids.allocate();
        let player = Player::new(id, name);
        debug!("adding {} as {}", player.name, id);

        self.players.push_back(player);
        self.changes.record(GameEvent::PlayerAdded {
            player: id,
            position: self.players.len() - 1,
        });
        self.changes.commit();
        id
    }

    /// Change a player's display name.
    ///
    /// Returns false if the id is unknown.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> bool {
        let Some(pos) = self.position_of(id) else {
            return false;
        };
        self.players[pos].name = name.into();
        self.changes.record(GameEvent::PlayerRenamed { player: id });
        self.changes.commit();
        true
    }

    /// Remove the player at `position`.
    pub fn remove_player(&mut self, position: usize) {
        self.remove_players([position]);
    }

    /// Remove the players at the given positions in one batch.
    ///
    /// Positions refer to the roster before removal. Duplicates and
    /// out-of-range positions are ignored. The turn index is repaired as
    /// follows:
    /// - each removed seat before the current one shifts it back by one
    /// - removing the current seat sends play back to seat 0
    /// - an empty roster or an out-of-bounds index also becomes 0
    pub fn remove_players(&mut self, positions: impl IntoIterator<Item = usize>) {
        let len = self.players.len();
        let mut positions: SmallVec<[usize; 4]> =
            positions.into_iter().filter(|&p| p < len).collect();
        positions.sort_unstable();
        positions.dedup();

        if positions.is_empty() {
            return;
        }

        let current = self.current_turn_index;
        let mut index = if positions.contains(&current) {
            0
        } else {
            let before = positions.iter().filter(|&&p| p < current).count();
            current.saturating_sub(before)
        };

        let mut removed = Vec::with_capacity(positions.len());
        for &pos in positions.iter().rev() {
            removed.push(self.players.remove(pos).id());
        }
        removed.reverse();

        if self.players.is_empty() || index >= self.players.len() {
            index = 0;
        }
        self.current_turn_index = index;
        self.debug_check_turn_index();

        debug!(
            "removed {:?}; turn index {} -> {}",
            removed, current, self.current_turn_index
        );
        self.changes.record(GameEvent::PlayersRemoved { players: removed });
        self.changes.commit();
    }

    /// Roster in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Seat of a player in the turn order.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    // === Derived queries ===

    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn_index)
    }

    /// Highest-scoring player; ties go to the earliest seat.
    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        rules::leader(&self.players)
    }

    /// Leader's score, or 0 with no players.
    #[must_use]
    pub fn leader_score(&self) -> i64 {
        self.leader().map_or(0, Player::score)
    }

    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.final_round.is_some()
    }

    /// How the final round started, if it has.
    #[must_use]
    pub fn final_round(&self) -> Option<&FinalRound> {
        self.final_round.as_ref()
    }

    /// Winning player, if decided and still on the roster.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    /// Winning player's id, even if they have since been removed.
    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has a winner been declared?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    // === Scoring ===

    /// Add `points` (possibly negative) to a player's score.
    ///
    /// Unknown ids are ignored. The first crossing of the winning score opens
    /// the final round; later crossings do not move it. Once a turn has been
    /// advanced inside the final round, every score change is checked for a
    /// winner.
    pub fn add_score(&mut self, points: i64, id: PlayerId) {
        self.apply_score(points, id);
        self.changes.commit();
    }

    fn apply_score(&mut self, points: i64, id: PlayerId) {
        let Some(pos) = self.position_of(id) else {
            debug!("ignoring {} points for unknown {}", points, id);
            return;
        };

        let (old, new) = self.players[pos].add_points(points);
        debug!("{} {:+} -> {}", id, points, new);
        self.changes.record(GameEvent::ScoreAdded {
            player: id,
            points,
            new_score: new,
        });

        if self.final_round.is_none() && !self.config.is_winning(old) && self.config.is_winning(new) {
            let round = FinalRound::new(id, self.current_turn_index);
            info!(
                "final round: {} reached {} at turn index {}",
                id, new, round.started_at
            );
            self.final_round = Some(round);
            self.changes.record(GameEvent::FinalRoundStarted {
                trigger: id,
                turn_index: round.started_at,
            });
        }

        if self.final_round.is_some_and(|r| r.has_advanced) {
            self.resolve_winner();
        }
    }

    // === Turns ===

    /// Pass play to the next seat, wrapping around.
    ///
    /// Does nothing with an empty roster. Inside the final round the first
    /// advance unlocks winner checks, and every advance runs one.
    pub fn advance_turn(&mut self) {
        self.apply_advance();
        self.changes.commit();
    }

    fn apply_advance(&mut self) {
        if self.players.is_empty() {
            return;
        }

        if let Some(round) = self.final_round.as_mut() {
            round.has_advanced = true;
        }

        self.current_turn_index = (self.current_turn_index + 1) % self.players.len();
        self.debug_check_turn_index();
        debug!("turn index -> {}", self.current_turn_index);
        self.changes.record(GameEvent::TurnAdvanced {
            turn_index: self.current_turn_index,
        });

        if self.final_round.is_some() {
            self.resolve_winner();
        }
    }

    /// Bank `points` for the current player and end their turn.
    ///
    /// Does nothing with an empty roster.
    pub fn bank(&mut self, points: i64) {
        let Some(id) = self.current_player().map(Player::id) else {
            return;
        };
        self.apply_score(points, id);
        self.apply_advance();
        self.changes.commit();
    }

    /// The current player busts: no points, turn ends.
    ///
    /// Does nothing with an empty roster.
    pub fn farkle(&mut self) {
        let Some(id) = self.current_player().map(Player::id) else {
            return;
        };
        debug!("{} farkled", id);
        self.changes.record(GameEvent::Farkled { player: id });
        self.apply_advance();
        self.changes.commit();
    }

    fn debug_check_turn_index(&self) {
        debug_assert!(
            self.current_turn_index < self.players.len()
                || (self.players.is_empty() && self.current_turn_index == 0),
            "turn index {} out of range for {} players",
            self.current_turn_index,
            self.players.len()
        );
    }

    fn resolve_winner(&mut self) {
        if self.winner.is_some() {
            return;
        }
        let Some(round) = self.final_round else {
            return;
        };

        if let Some(id) = rules::check_winner(&self.players, self.current_turn_index, &round, &self.config) {
            let score = self.player(id).map_or(0, Player::score);
            debug_assert!(self.config.is_winning(score));
            info!("{} wins with {}", id, score);
            self.winner = Some(id);
            self.changes.record(GameEvent::WinnerDeclared { player: id, score });
        }
    }

    // === Lifecycle ===

    /// Start a new game with the same roster.
    ///
    /// Scores go to 0, play returns to seat 0, and the final round and winner
    /// are cleared. Ids and names are kept.
    pub fn reset_game(&mut self) {
        for player in self.players.iter_mut() {
            player.reset_score();
        }
        self.current_turn_index = 0;
        self.final_round = None;
        self.winner = None;
        self.debug_check_turn_index();

        info!("game reset with {} players", self.players.len());
        self.changes.record(GameEvent::GameReset);
        self.changes.commit();
    }

    // === Change notification ===

    /// Incremented once per command that changed something.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.changes.version()
    }

    /// Events not yet drained, oldest first.
    ///
    /// Holds at most `FarkleConfig::max_pending_events`; older events are
    /// dropped once it is full.
    #[must_use]
    pub fn pending_events(&self) -> &VecDeque<GameEvent> {
        self.changes.pending()
    }

    /// Events dropped from a full queue since the game was created.
    #[must_use]
    pub fn dropped_events(&self) -> u64 {
        self.changes.dropped()
    }

    /// Take all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.changes.drain()
    }

    /// Read-only copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            players: self.players.clone(),
            current_turn_index: self.current_turn_index,
            final_round: self.final_round,
            winner: self.winner,
            version: self.changes.version(),
        }
    }
}
