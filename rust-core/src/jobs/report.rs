use std::fmt;
use std::path::PathBuf;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::coset::decomposition::CosetSummary;
use crate::error::CosetError;
use crate::interfaces::{Algorithm, Centricity, ReportFormat};
use crate::symmetries::operator_codec::Fingerprint;
use crate::symmetries::symmetry_operations::{Classification, OperatorSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskHeader {
    pub title: String,
    pub supergroup: String,
    pub subgroup: String,
    pub centricity: Centricity,
    pub algorithm: Algorithm,
    pub transform: Matrix3<f64>,
    pub ins_file: Option<PathBuf>,
    pub new_ins_base: Option<String>,
    pub executable: Option<PathBuf>,
}

/// An operator before and after a change of basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorPair {
    pub original: Matrix3<f64>,
    pub transformed: Matrix3<f64>,
    /// Fingerprint of the transformed matrix
    pub fingerprint: Fingerprint,
    pub is_representative: bool,
    pub classification: Option<Classification>,
}

impl OperatorPair {
    pub fn is_inversion(&self) -> bool {
        self.fingerprint == Fingerprint::INVERSION
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub header: TaskHeader,
    pub subgroup: Vec<OperatorPair>,
    pub supergroup: Vec<OperatorPair>,
    pub summary: CosetSummary,
    pub new_ins_files: Vec<PathBuf>,
}

/// Zip two operator sets; flags and classifications come from `transformed`.
pub fn pair_operators(
    original: &OperatorSet,
    transformed: &OperatorSet,
) -> Result<Vec<OperatorPair>, CosetError> {
    if original.len() != transformed.len() {
        return Err(CosetError::LengthMismatch {
            left: original.len(),
            right: transformed.len(),
        });
    }

    Ok(original
        .iter()
        .zip(transformed)
        .map(|(o, t)| OperatorPair {
            original: *o.matrix(),
            transformed: *t.matrix(),
            fingerprint: t.fingerprint(),
            is_representative: t.is_representative,
            classification: t.classification.clone(),
        })
        .collect())
}

impl TaskReport {
    /// Supergroup operators that survived the decomposition.
    pub fn twin_laws(&self) -> impl Iterator<Item = &OperatorPair> {
        self.supergroup.iter().filter(|p| p.is_representative)
    }

    pub fn coset_index(&self) -> usize {
        self.summary.index
    }

    pub fn to_json(&self) -> Result<String, CosetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, CosetError> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

// Adding +0.0 turns a negative zero into a positive one
fn entry(x: f64) -> f64 {
    x + 0.0
}

fn write_pairs(
    f: &mut fmt::Formatter<'_>,
    left: &str,
    right: &str,
    pairs: &[OperatorPair],
) -> fmt::Result {
    writeln!(f, "{}\t{}", left, right)?;
    for pair in pairs.iter().filter(|p| p.is_representative) {
        if pair.is_inversion() {
            writeln!(f, "Twin domains related by inversion")?;
        } else if let Some(c) = pair.classification.as_ref().filter(|c| c.fold != 0) {
            writeln!(
                f,
                "** {}-fold ({}) rotation axis about the [{:4.2} {:5.2} {:5.2}] direction. **",
                c.fold,
                if c.is_proper() { "proper" } else { "improper" },
                entry(c.axis[0]),
                entry(c.axis[1]),
                entry(c.axis[2])
            )?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{:6.2}{:6.2}{:6.2}\t\t\t{:6.2}{:6.2}{:6.2}",
                entry(pair.original[(row, 0)]),
                entry(pair.original[(row, 1)]),
                entry(pair.original[(row, 2)]),
                entry(pair.transformed[(row, 0)]),
                entry(pair.transformed[(row, 1)]),
                entry(pair.transformed[(row, 2)])
            )?;
        }
        writeln!(f, "\n")?;
    }
    writeln!(f)
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = &self.header;
        writeln!(f, "COSET Decomposition Program (flack-coset {})\n", crate::VERSION)?;
        writeln!(f, "Task Description: {}", h.title)?;
        writeln!(f, "Metrically Available Supergroup's Symmetry: {}", h.supergroup)?;
        writeln!(
            f,
            "Crystal's Pointgroup (Subgroup): {} ({})",
            h.subgroup,
            h.centricity.as_str()
        )?;
        writeln!(f, "Flack Algorithm: {}", h.algorithm)?;
        writeln!(f, "Matrix which transforms Subgroup's Lattice to Supergroup's Lattice:")?;
        for row in 0..3 {
            writeln!(
                f,
                "{:8.4}{:8.4}{:8.4}",
                entry(h.transform[(row, 0)]),
                entry(h.transform[(row, 1)]),
                entry(h.transform[(row, 2)])
            )?;
        }
        writeln!(f)?;
        if let Some(ins) = &h.ins_file {
            writeln!(f, "Original SHELX .ins file: {}", ins.display())?;
        }
        if let Some(base) = &h.new_ins_base {
            writeln!(f, "New SHELX .ins files to be created with this basename: {}", base)?;
        }
        if let Some(exec) = &h.executable {
            writeln!(
                f,
                "SHELXL executable {} was given, but refinements are not run by this program",
                exec.display()
            )?;
        }
        writeln!(f)?;

        write_pairs(
            f,
            "Subgroup Symmetry Matrices",
            "Subgroup Symmetry Matrices Transformed to Supergroup's Lattice",
            &self.subgroup,
        )?;

        writeln!(f, "\n*** Potential Twin Laws for this Subgroup-Supergroup Relationship ***")?;
        writeln!(f, "Use matrices in right hand column for creating SHELX TWIN instructions.\n")?;
        write_pairs(
            f,
            "Untransformed Supergroup Matrices",
            "Transformed to Subgroup's Lattice",
            &self.supergroup,
        )?;

        writeln!(
            f,
            "Coset index: {} ({} supergroup operators searched, {} subgroup generators)",
            self.summary.index, self.summary.supergroup_considered, self.summary.generators_considered
        )?;
        for path in &self.new_ins_files {
            writeln!(f, "New SHELX .ins file written: {}", path.display())?;
        }
        writeln!(f, "### End of COSET Output ###")
    }
}
