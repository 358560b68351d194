//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Opaque player identifier. Ids are minted by `PlayerIdAllocator`, which the
//! game state owns, so an id is never handed out twice within one game even
//! after the player holding it has been removed.
//!
//! ## Player
//!
//! A roster entry: immutable id, mutable display name, running score.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// Callers should only use ids obtained from the game state's queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a player ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player#{}", self.0)
    }
}

/// Monotonic id source. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdAllocator {
    next: u32,
}

impl PlayerIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id.
    pub fn allocate(&mut self) -> PlayerId {
        assert!(self.next < u32::MAX, "Player id space exhausted");
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// A player on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,

    /// Display name, freely editable.
    pub name: String,

    score: i64,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Apply a score delta. Negative deltas are allowed and there is no floor.
    ///
    /// Returns `(old, new)`.
    pub(crate) fn add_points(&mut self, points: i64) -> (i64, i64) {
        let old = self.score;
        self.score = old.saturating_add(points);
        (old, self.score)
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}
