//! Core engine types: players, configuration, change events, state, snapshots.
//!
//! `GameState` is the single owned engine for one table. Presentation layers
//! hold it (or a `GameSnapshot` of it) and drive it through its commands.

pub mod player;
pub mod config;
pub mod event;
pub mod state;
pub mod snapshot;

pub use player::{Player, PlayerId, PlayerIdAllocator};
pub use config::{
    FarkleConfig, DEFAULT_MAX_INPUT_DIGITS, DEFAULT_MAX_PENDING_EVENTS, DEFAULT_WINNING_SCORE,
    MAX_INPUT_DIGITS_LIMIT,
};
pub use event::{ChangeLog, GameEvent};
pub use state::GameState;
pub use snapshot::{GameSnapshot, SnapshotError};
