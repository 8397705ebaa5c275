/// Utility functions for the flack-coset Python module
use pyo3::prelude::*;

/// Get the version of the flack-coset library
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
