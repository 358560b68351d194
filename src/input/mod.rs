//! Score entry for presentation layers.
//!
//! Turns number-pad keystrokes into points and drives `GameState::bank` and
//! `GameState::farkle`.

pub mod buffer;

pub use buffer::{InputError, ScoreInput, Shortcut};
