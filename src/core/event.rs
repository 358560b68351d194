//! Change notification.
//!
//! Every mutating call on `GameState` that actually changes something bumps a
//! version counter and queues one or more `GameEvent`s. A presentation layer
//! can either compare `version()` against the last value it rendered, or drain
//! the queued events and react to each one.
//!
//! Calls that are silently ignored (unknown player id, advancing an empty
//! roster) neither bump the version nor queue events.
//!
//! The queue is bounded. Consumers that only watch `version()` never drain it,
//! so once it is full the oldest events are dropped and counted.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_MAX_PENDING_EVENTS;
use super::player::PlayerId;

/// Something that happened to the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player joined at the end of the turn order.
    PlayerAdded { player: PlayerId, position: usize },

    /// A player's display name changed.
    PlayerRenamed { player: PlayerId },

    /// One batch of players left the roster.
    PlayersRemoved { players: Vec<PlayerId> },

    /// Points were applied to a player (may be negative).
    ScoreAdded {
        player: PlayerId,
        points: i64,
        new_score: i64,
    },

    /// A player crossed the winning score and opened the final round.
    FinalRoundStarted { trigger: PlayerId, turn_index: usize },

    /// The game has a winner.
    WinnerDeclared { player: PlayerId, score: i64 },

    /// Play moved to the next seat.
    TurnAdvanced { turn_index: usize },

    /// A player busted for zero points.
    Farkled { player: PlayerId },

    /// Scores and round state were cleared.
    GameReset,
}

impl GameEvent {
    /// The player this event is about, if it concerns exactly one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerAdded { player, .. }
            | GameEvent::PlayerRenamed { player }
            | GameEvent::ScoreAdded { player, .. }
            | GameEvent::WinnerDeclared { player, .. }
            | GameEvent::Farkled { player } => Some(*player),
            GameEvent::FinalRoundStarted { trigger, .. } => Some(*trigger),
            GameEvent::PlayersRemoved { .. } | GameEvent::TurnAdvanced { .. } | GameEvent::GameReset => None,
        }
    }
}

/// Version counter plus a bounded queue of pending events.
#[derive(Clone, Debug)]
pub struct ChangeLog {
    version: u64,
    pending: VecDeque<GameEvent>,
    /// Events recorded during the current mutation, not yet committed.
    staged: Vec<GameEvent>,
    limit: usize,
    dropped: u64,
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_PENDING_EVENTS)
    }
}

impl ChangeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change log keeping at most `limit` undrained events.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "Event queue must hold at least 1 event");
        Self {
            version: 0,
            pending: VecDeque::new(),
            staged: Vec::new(),
            limit,
            dropped: 0,
        }
    }

    /// Maximum number of undrained events kept.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Events discarded because the queue was full.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Current version. Starts at 0.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Stage an event for the mutation in progress.
    pub fn record(&mut self, event: GameEvent) {
        self.staged.push(event);
    }

    /// Finish a mutation: if anything was staged, bump the version once and
    /// move the staged events to the pending queue, dropping the oldest
    /// events past the limit.
    ///
    /// Returns true if the version changed.
    pub fn commit(&mut self) -> bool {
        if self.staged.is_empty() {
            return false;
        }
        self.version += 1;
        self.pending.extend(self.staged.drain(..));
        while self.pending.len() > self.limit {
            self.pending.pop_front();
            self.dropped += 1;
        }
        true
    }

    /// Pending events, oldest first.
    #[must_use]
    pub fn pending(&self) -> &VecDeque<GameEvent> {
        &self.pending
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }
}
