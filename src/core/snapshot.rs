//! Read-only state snapshots.
//!
//! A `GameSnapshot` is what a renderer holds between frames. The roster is an
//! `im::Vector` shared with the live state, so taking a snapshot is cheap.
//! Snapshots can be shipped across a process boundary with `to_bytes`.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::FarkleConfig;
use super::player::{Player, PlayerId};
use crate::rules::{self, FinalRound};

/// Snapshot encoding failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Frozen copy of a `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: FarkleConfig,
    pub players: Vector<Player>,
    pub current_turn_index: usize,
    pub final_round: Option<FinalRound>,
    pub winner: Option<PlayerId>,
    /// `GameState::version()` at the time of the snapshot.
    pub version: u64,
}

impl GameSnapshot {
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_turn_index)
    }

    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        rules::leader(&self.players)
    }

    #[must_use]
    pub fn leader_score(&self) -> i64 {
        self.leader().map_or(0, Player::score)
    }

    #[must_use]
    pub fn is_final_round(&self) -> bool {
        self.final_round.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let id = self.winner?;
        self.players.iter().find(|p| p.id() == id)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
