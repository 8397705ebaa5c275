//! Error types for coset decomposition tasks.
//!
//! Every failure a task can hit is a [`CosetError`]. Errors never abort the
//! process; the batch runner drops the failing task and moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Broad classes of failures, used to decide how loudly a failed task is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A matrix entry that is not -1, 0 or 1.
    Encoding,
    /// A trace/determinant pair or eigenpair that no crystallographic operator has.
    Classification,
    /// The eigen solver did not converge.
    Numerical,
    /// Unknown names, missing algorithm, singular or mismatched inputs.
    Configuration,
    /// Malformed job file.
    Input,
    Io,
}

#[derive(Debug, Error)]
pub enum CosetError {
    #[error("matrix element ({row},{col}) = {value} is not -1, 0 or 1")]
    NonIntegralOperator { row: usize, col: usize, value: f64 },

    #[error("fingerprint {0:#x} does not encode a symmetry operator")]
    InvalidFingerprint(u32),

    #[error("determinant {determinant:.4} and trace {trace:.4} do not correspond to any crystallographic point symmetry operation")]
    UnknownOperatorType { trace: f64, determinant: f64 },

    #[error("eigenpair {index} has non-zero imaginary components")]
    ComplexEigenResidue { index: usize },

    #[error("no real eigenvalue with the sign of the determinant ({determinant:+.0})")]
    NoAxisEigenpair { determinant: f64 },

    #[error("{solver} eigen solver did not converge")]
    EigenNoConvergence { solver: &'static str },

    #[error("unknown point group: {0}")]
    UnknownPointGroup(String),

    #[error("unrecognised algorithm {0:?}, expected A or B")]
    UnknownAlgorithm(String),

    #[error("no coset decomposition algorithm selected")]
    NoAlgorithm,

    #[error("task is missing a {0} directive")]
    MissingDirective(&'static str),

    #[error("matrix is singular (determinant {0:e})")]
    SingularMatrix(f64),

    #[error("operator lists differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("subgroup declares {expected} matrices but {found} RMAT lines were read")]
    SubgroupCount { expected: usize, found: usize },

    #[error("first subgroup operator must be the identity")]
    IdentityNotFirst,

    #[error("centric subgroup has {proper} proper and {improper} improper operators")]
    UnbalancedCentricSet { proper: usize, improper: usize },

    #[error("operator {0:#x} of a centric subgroup has no inversion partner")]
    MissingInversionPartner(u32),

    #[error("{}:{line}: {message}", file.display())]
    JobFile {
        file: PathBuf,
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CosetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CosetError::NonIntegralOperator { .. } | CosetError::InvalidFingerprint(_) => {
                ErrorKind::Encoding
            }
            CosetError::UnknownOperatorType { .. }
            | CosetError::ComplexEigenResidue { .. }
            | CosetError::NoAxisEigenpair { .. } => ErrorKind::Classification,
            CosetError::EigenNoConvergence { .. } => ErrorKind::Numerical,
            CosetError::UnknownPointGroup(_)
            | CosetError::UnknownAlgorithm(_)
            | CosetError::NoAlgorithm
            | CosetError::MissingDirective(_)
            | CosetError::SingularMatrix(_)
            | CosetError::LengthMismatch { .. }
            | CosetError::SubgroupCount { .. }
            | CosetError::IdentityNotFirst
            | CosetError::UnbalancedCentricSet { .. }
            | CosetError::MissingInversionPartner(_) => ErrorKind::Configuration,
            CosetError::JobFile { .. } => ErrorKind::Input,
            CosetError::Io(_) | CosetError::Json(_) => ErrorKind::Io,
        }
    }

    /// Violated mathematical preconditions: the input matrices are not valid
    /// crystallographic operators.
    pub fn is_numeric_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Classification | ErrorKind::Numerical
        )
    }
}
