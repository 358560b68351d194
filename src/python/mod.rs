//! Python bindings for the Farkle score tracker.
//!
//! # Quick Start
//!
//! ```python
//! import farkle_tracker as ft
//!
//! game = ft.FarkleGame()
//! ada = game.add_player("Ada")
//! game.add_player("Bob")
//!
//! game.press_digit(5)
//! game.press_shortcut("00")
//! game.bank()          # Ada banks 500, Bob is up
//! game.farkle()        # Bob busts, back to Ada
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// farkle_tracker: turn and final-round engine for Farkle score keeping.
#[pymodule]
fn farkle_tracker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyFarkleGame>()?;
    Ok(())
}
