use pyo3::prelude::*;

// Module declarations
mod coset;
mod utils;

use coset::{decomp, twin_laws, PyTwinLaw};
use utils::version;

/// Python module definition
#[pymodule]
fn flack_coset_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTwinLaw>()?;

    // Decomposition functions
    m.add_function(wrap_pyfunction!(decomp, m)?)?;
    m.add_function(wrap_pyfunction!(twin_laws, m)?)?;

    // Utility functions
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
