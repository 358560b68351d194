//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{FarkleConfig, GameState, Player, MAX_INPUT_DIGITS_LIMIT};
use crate::input::{ScoreInput, Shortcut};

use super::py_core::{PyPlayer, PyPlayerId};

/// Python wrapper for GameState plus its entry pad.
#[pyclass(name = "FarkleGame")]
pub struct PyFarkleGame {
    state: GameState,
    input: ScoreInput,
}

#[pymethods]
impl PyFarkleGame {
    /// Create an empty game.
    ///
    /// # Arguments
    /// - winning_score: Threshold that opens the final round
    /// - max_input_digits: Length limit of the entry pad
    #[new]
    #[pyo3(signature = (winning_score = 10_000, max_input_digits = 6))]
    fn new(winning_score: i64, max_input_digits: usize) -> PyResult<Self> {
        if winning_score <= 0 {
            return Err(PyValueError::new_err("winning_score must be positive"));
        }
        if !(1..=MAX_INPUT_DIGITS_LIMIT).contains(&max_input_digits) {
            return Err(PyValueError::new_err(format!(
                "max_input_digits must be 1-{}",
                MAX_INPUT_DIGITS_LIMIT
            )));
        }
        let config = FarkleConfig::new()
            .with_winning_score(winning_score)
            .with_max_input_digits(max_input_digits);
        let input = ScoreInput::for_config(&config);
        Ok(Self {
            state: GameState::with_config(config),
            input,
        })
    }

    fn add_player(&mut self, name: String) -> PyPlayerId {
        PyPlayerId(self.state.add_player(name))
    }

    fn rename_player(&mut self, player: &PyPlayerId, name: String) -> bool {
        self.state.rename_player(player.0, name)
    }

    fn remove_players(&mut self, positions: Vec<usize>) {
        self.state.remove_players(positions);
    }

    fn add_score(&mut self, points: i64, player: &PyPlayerId) {
        self.state.add_score(points, player.0);
    }

    fn advance_turn(&mut self) {
        self.state.advance_turn();
    }

    fn reset_game(&mut self) {
        self.state.reset_game();
        self.input.clear();
    }

    // === Entry pad ===

    /// Append a digit 0-9. Returns False if it did not fit.
    fn press_digit(&mut self, digit: u8) -> bool {
        self.input.push_digit(digit)
    }

    /// Append "50" or "00". Returns False if it did not fit.
    fn press_shortcut(&mut self, key: &str) -> PyResult<bool> {
        let shortcut = match key {
            "50" => Shortcut::Fifty,
            "00" => Shortcut::DoubleZero,
            other => {
                return Err(PyValueError::new_err(format!(
                    "unknown shortcut '{}'",
                    other
                )))
            }
        };
        Ok(self.input.push_shortcut(shortcut))
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    #[getter]
    fn input(&self) -> String {
        self.input.to_string()
    }

    /// Bank the typed score. Raises ValueError on an empty pad.
    fn bank(&mut self) -> PyResult<i64> {
        self.input
            .bank(&mut self.state)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn farkle(&mut self) {
        self.input.farkle(&mut self.state);
    }

    // === Queries ===

    #[getter]
    fn players(&self) -> Vec<PyPlayer> {
        self.state.players().iter().cloned().map(PyPlayer).collect()
    }

    #[getter]
    fn current_turn_index(&self) -> usize {
        self.state.current_turn_index()
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayer> {
        self.state.current_player().cloned().map(PyPlayer)
    }

    #[getter]
    fn leader(&self) -> Option<PyPlayer> {
        self.state.leader().cloned().map(PyPlayer)
    }

    #[getter]
    fn leader_score(&self) -> i64 {
        self.state.leader_score()
    }

    #[getter]
    fn is_final_round(&self) -> bool {
        self.state.is_final_round()
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayer> {
        self.state.winner().cloned().map(PyPlayer)
    }

    #[getter]
    fn version(&self) -> u64 {
        self.state.version()
    }

    fn __repr__(&self) -> String {
        let current = self
            .state
            .current_player()
            .map_or_else(|| "-".to_string(), |p: &Player| p.name.clone());
        format!(
            "FarkleGame(players={}, current={}, final_round={})",
            self.state.player_count(),
            current,
            self.state.is_final_round()
        )
    }
}
