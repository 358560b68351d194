//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Player, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u32) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the raw ID value.
    #[getter]
    fn id(&self) -> u32 {
        self.0.raw()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.raw())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.raw())
    }
}

/// Read-only copy of a roster entry.
#[pyclass(name = "Player")]
#[derive(Clone, Debug)]
pub struct PyPlayer(pub Player);

#[pymethods]
impl PyPlayer {
    #[getter]
    fn id(&self) -> PyPlayerId {
        PyPlayerId(self.0.id())
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.0.score()
    }

    fn __repr__(&self) -> String {
        format!(
            "Player(id={}, name={:?}, score={})",
            self.0.id().raw(),
            self.0.name,
            self.0.score()
        )
    }
}
