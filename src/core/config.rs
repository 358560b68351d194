//! Game configuration.
//!
//! `FarkleConfig` carries the few tunables of the tracker. The defaults match
//! the standard table rules: 10,000 points to win and a six digit entry pad.

use serde::{Deserialize, Serialize};

/// Score that ends the normal game and opens the final round.
pub const DEFAULT_WINNING_SCORE: i64 = 10_000;

/// Longest score the entry pad accepts.
pub const DEFAULT_MAX_INPUT_DIGITS: usize = 6;

/// Undrained change events kept before the oldest are dropped.
pub const DEFAULT_MAX_PENDING_EVENTS: usize = 1024;

/// Longest entry that always fits in an `i64`.
pub const MAX_INPUT_DIGITS_LIMIT: usize = 18;

/// Tracker configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarkleConfig {
    /// Threshold a player must reach to trigger the final round and to win.
    pub winning_score: i64,

    /// Maximum number of digits held by `ScoreInput`.
    pub max_input_digits: usize,

    /// Capacity of the change event queue.
    pub max_pending_events: usize,
}

impl Default for FarkleConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            max_input_digits: DEFAULT_MAX_INPUT_DIGITS,
            max_pending_events: DEFAULT_MAX_PENDING_EVENTS,
        }
    }
}

impl FarkleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning threshold.
    #[must_use]
    pub fn with_winning_score(mut self, score: i64) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Set the entry pad length.
    #[must_use]
    pub fn with_max_input_digits(mut self, digits: usize) -> Self {
        assert!(digits > 0, "Input must allow at least 1 digit");
        assert!(
            digits <= MAX_INPUT_DIGITS_LIMIT,
            "At most 18 input digits supported"
        );
        self.max_input_digits = digits;
        self
    }

    /// Set how many undrained change events are kept.
    #[must_use]
    pub fn with_max_pending_events(mut self, events: usize) -> Self {
        assert!(events > 0, "Event queue must hold at least 1 event");
        self.max_pending_events = events;
        self
    }

    /// Has `score` reached the winning threshold?
    #[must_use]
    pub fn is_winning(&self, score: i64) -> bool {
        score >= self.winning_score
    }
}
