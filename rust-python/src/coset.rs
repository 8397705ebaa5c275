//! Python bindings for job files and single decompositions

use std::path::PathBuf;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use flack_coset::error::{CosetError, ErrorKind};
use flack_coset::interfaces::{Algorithm, ReportFormat};
use flack_coset::jobs::{process_task, run_job_file, OperatorPair, Task};

fn to_py_err(err: CosetError) -> PyErr {
    match err.kind() {
        ErrorKind::Io => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn rows(m: &nalgebra::Matrix3<f64>) -> [[f64; 3]; 3] {
    [
        [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
        [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
        [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
    ]
}

/// Python wrapper for one coset representative of a decomposition
#[pyclass(name = "TwinLaw")]
#[derive(Clone)]
pub struct PyTwinLaw {
    /// Order of the rotation axis, negative for rotoinversions
    #[pyo3(get)]
    pub fold: i32,
    /// Rotation angle in degrees
    #[pyo3(get)]
    pub angle: f64,
    #[pyo3(get)]
    pub axis: [f64; 3],
    /// Operator in the subgroup's basis, row by row
    #[pyo3(get)]
    pub matrix: [[f64; 3]; 3],
}

impl PyTwinLaw {
    fn from_pair(pair: &OperatorPair) -> Option<Self> {
        let c = pair.classification.as_ref()?;
        Some(PyTwinLaw {
            fold: c.fold,
            angle: c.rotation_angle,
            axis: [c.axis[0], c.axis[1], c.axis[2]],
            matrix: rows(&pair.transformed),
        })
    }
}

#[pymethods]
impl PyTwinLaw {
    fn is_proper(&self) -> bool {
        self.fold > 0
    }

    fn __repr__(&self) -> String {
        format!(
            "TwinLaw(fold={}, angle={:.1}, axis=[{}, {}, {}])",
            self.fold, self.angle, self.axis[0], self.axis[1], self.axis[2]
        )
    }
}

/// Run every task of a COSET job file, printing the reports
///
/// Args:
///     filename: Path of the job file
///
/// Returns:
///     str: A one-line summary of the run
#[pyfunction]
pub fn decomp(filename: PathBuf) -> PyResult<String> {
    let summary = run_job_file(&filename, ReportFormat::Text).map_err(to_py_err)?;
    Ok(format!(
        "Program processed {} tasks input from file {}",
        summary.processed,
        filename.display()
    ))
}

/// Potential twin laws of a catalog subgroup in a catalog supergroup
///
/// Args:
///     supergroup: Holohedry symbol of the lattice, e.g. "m-3m"
///     subgroup: Holohedry or rotation group symbol of the crystal, e.g. "222"
///     algorithm: "A", "B" or "B extended"
///
/// Returns:
///     list[TwinLaw]: One entry per coset representative, identity first
#[pyfunction]
#[pyo3(signature = (supergroup, subgroup, algorithm = "B"))]
pub fn twin_laws(supergroup: &str, subgroup: &str, algorithm: &str) -> PyResult<Vec<PyTwinLaw>> {
    let algorithm = Algorithm::from_directive(algorithm).map_err(to_py_err)?;
    let title = format!("{} crystal, {} lattice", subgroup, supergroup);
    let task = Task::new(title, algorithm, supergroup, subgroup).map_err(to_py_err)?;
    let report = process_task(task).map_err(to_py_err)?;
    Ok(report.twin_laws().filter_map(PyTwinLaw::from_pair).collect())
}
