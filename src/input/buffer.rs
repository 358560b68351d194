//! Score entry buffer.
//!
//! Models the number pad a tracker shows under the roster: single digits, the
//! "50" and "00" shortcut keys, a clear key, and the Bank / Farkle actions.
//! The buffer never holds more than `FarkleConfig::max_input_digits` digits,
//! itself capped at `MAX_INPUT_DIGITS_LIMIT`, so any entry fits in an `i64`.

use log::debug;
use thiserror::Error;

use crate::core::config::{FarkleConfig, DEFAULT_MAX_INPUT_DIGITS, MAX_INPUT_DIGITS_LIMIT};
use crate::core::GameState;

/// Why the buffer could not produce a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no score entered")]
    Empty,
}

/// Multi-digit shortcut keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Appends "50".
    Fifty,
    /// Appends "00".
    DoubleZero,
}

impl Shortcut {
    #[must_use]
    pub const fn digits(self) -> &'static str {
        match self {
            Shortcut::Fifty => "50",
            Shortcut::DoubleZero => "00",
        }
    }
}

/// Digits typed so far for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreInput {
    digits: String,
    max_digits: usize,
}

impl Default for ScoreInput {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_DIGITS)
    }
}

impl ScoreInput {
    /// Empty buffer holding at most `max_digits` digits.
    #[must_use]
    pub fn new(max_digits: usize) -> Self {
        assert!(max_digits > 0, "Input must allow at least 1 digit");
        assert!(
            max_digits <= MAX_INPUT_DIGITS_LIMIT,
            "At most 18 input digits supported"
        );
        Self {
            digits: String::with_capacity(max_digits),
            max_digits,
        }
    }

    /// Empty buffer sized from a game configuration.
    #[must_use]
    pub fn for_config(config: &FarkleConfig) -> Self {
        Self::new(config.max_input_digits)
    }

    /// Append one digit (0-9). Ignored when full or not a digit.
    ///
    /// Returns true if the digit was appended.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digits.len() >= self.max_digits {
            return false;
        }
        self.digits.push(char::from(b'0' + digit));
        true
    }

    /// Append a shortcut. Ignored unless both digits fit.
    pub fn push_shortcut(&mut self, shortcut: Shortcut) -> bool {
        let digits = shortcut.digits();
        if self.digits.len() + digits.len() > self.max_digits {
            return false;
        }
        self.digits.push_str(digits);
        true
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Parse the buffer as a score.
    pub fn value(&self) -> Result<i64, InputError> {
        if self.digits.is_empty() {
            return Err(InputError::Empty);
        }
        // Only ASCII digits are ever pushed, at most 18 of them
        Ok(self
            .digits
            .bytes()
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0')))
    }

    /// Bank the entered score for the current player and end their turn.
    ///
    /// The buffer is cleared on success and left untouched on error.
    pub fn bank(&mut self, game: &mut GameState) -> Result<i64, InputError> {
        let points = self.value()?;
        debug!("banking {} from input", points);
        game.bank(points);
        self.clear();
        Ok(points)
    }

    /// Bust the current player and clear whatever was typed.
    pub fn farkle(&mut self, game: &mut GameState) {
        game.farkle();
        self.clear();
    }
}

impl std::fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.digits.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&self.digits)
        }
    }
}
