//! # farkle-tracker
//!
//! The game-state engine behind a Farkle score tracker: whose turn it is,
//! when the final round starts, and who wins it.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: No UI types. A presentation layer owns one
//!    `GameState`, calls its commands, and reads its queries.
//!
//! 2. **Total Commands**: Every command accepts any input. Unknown ids and
//!    out-of-range positions are ignored, never reported.
//!
//! 3. **Observable**: Each command that changes state bumps a version counter
//!    and queues `GameEvent`s, so renderers never need to poll.
//!
//! ## Final Round
//!
//! The first player to reach the winning score (10,000 by default) opens the
//! final round. Everyone else then gets a turn. A player who beats every
//! other score on their turn wins immediately; otherwise the leader wins when
//! play returns to the trigger player's seat.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, events, state, snapshots
//! - `rules`: Leader selection and final-round resolution
//! - `input`: Number-pad score entry
//!
//! ## Example
//!
//! ```
//! use farkle_tracker::GameState;
//!
//! let mut game = GameState::new();
//! game.add_player("Ada");
//! let bob = game.add_player("Bob");
//!
//! game.bank(10_050); // Ada crosses 10,000
//! assert!(game.is_final_round());
//!
//! game.add_score(10_100, bob); // Bob's turn, and Bob passes Ada
//! assert_eq!(game.winner().map(|p| p.id()), Some(bob));
//! ```

pub mod core;
pub mod rules;
pub mod input;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, PlayerIdAllocator,
    FarkleConfig, DEFAULT_WINNING_SCORE, DEFAULT_MAX_INPUT_DIGITS,
    DEFAULT_MAX_PENDING_EVENTS, MAX_INPUT_DIGITS_LIMIT,
    ChangeLog, GameEvent,
    GameState,
    GameSnapshot, SnapshotError,
};

pub use crate::rules::{check_winner, leader, FinalRound};

pub use crate::input::{InputError, ScoreInput, Shortcut};
