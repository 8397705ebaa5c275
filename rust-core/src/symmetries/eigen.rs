//! Eigenvalues and eigenvectors of 3x3 symmetry matrices.
//!
//! Symmetric matrices go through nalgebra's [`SymmetricEigen`]; all others
//! through a real Schur decomposition, whose (possibly complex) eigenvalues
//! are paired with null vectors of `M - λI`.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use num_complex::Complex64;

use crate::config::{
    EIGEN_CONVERGENCE_EPS, EIGEN_IMAGINARY_TOLERANCE, EIGEN_MAX_ITERATIONS, OPERATOR_TOLERANCE,
};
use crate::error::CosetError;

// Cross products of rows shorter than this are treated as zero when finding null vectors
const RANK_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealEigenPair {
    pub value: f64,
    pub vector: Vector3<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexEigenPair {
    pub value: Complex64,
    pub vector: Vector3<Complex64>,
}

impl ComplexEigenPair {
    pub fn is_real(&self) -> bool {
        self.value.im.abs() <= EIGEN_IMAGINARY_TOLERANCE
    }

    /// Drop the imaginary parts. Fails if any of them is not zero; `index` only
    /// labels the pair in the error.
    pub fn to_real(&self, index: usize) -> Result<RealEigenPair, CosetError> {
        let residue = !self.is_real()
            || self
                .vector
                .iter()
                .any(|c| c.im.abs() > EIGEN_IMAGINARY_TOLERANCE);
        if residue {
            return Err(CosetError::ComplexEigenResidue { index });
        }

        Ok(RealEigenPair {
            value: self.value.re,
            vector: self.vector.map(|c| c.re),
        })
    }
}

impl std::fmt::Display for ComplexEigenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:6.2}{:+6.2}i:", self.value.re, self.value.im)?;
        for c in self.vector.iter() {
            write!(f, " {:6.2}{:+6.2}i", c.re, c.im)?;
        }
        Ok(())
    }
}

/// Eigenpairs of a symmetric matrix, sorted by ascending |λ|.
pub fn symmetric_eigen_solve(m: &Matrix3<f64>) -> Result<[RealEigenPair; 3], CosetError> {
    let eigen = SymmetricEigen::try_new(*m, EIGEN_CONVERGENCE_EPS, EIGEN_MAX_ITERATIONS)
        .ok_or(CosetError::EigenNoConvergence { solver: "symmetric" })?;

    let mut pairs = [0, 1, 2].map(|i| RealEigenPair {
        value: eigen.eigenvalues[i],
        vector: eigen.eigenvectors.column(i).into_owned(),
    });
    pairs.sort_by(|a, b| a.value.abs().total_cmp(&b.value.abs()));
    Ok(pairs)
}

/// Eigenpairs of a general real matrix, sorted by descending |λ|.
///
/// Eigenvectors are normalized to unit length with their largest component
/// real and positive, so a real eigenvalue comes with a real eigenvector.
pub fn general_eigen_solve(m: &Matrix3<f64>) -> Result<[ComplexEigenPair; 3], CosetError> {
    let schur = m
        .try_schur(EIGEN_CONVERGENCE_EPS, EIGEN_MAX_ITERATIONS)
        .ok_or(CosetError::EigenNoConvergence { solver: "general" })?;
    let values = schur.complex_eigenvalues();

    let complex_m = m.map(|x| Complex64::new(x, 0.0));
    let mut pairs = [0, 1, 2].map(|i| {
        let lambda = values[i];
        let shifted = complex_m - Matrix3::from_diagonal_element(lambda);
        ComplexEigenPair {
            value: lambda,
            vector: null_vector(&shifted),
        }
    });
    pairs.sort_by(|a, b| b.value.norm().total_cmp(&a.value.norm()));
    Ok(pairs)
}

fn cross(a: &Vector3<Complex64>, b: &Vector3<Complex64>) -> Vector3<Complex64> {
    Vector3::new(
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    )
}

fn norm(v: &Vector3<Complex64>) -> f64 {
    v.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

fn longest(candidates: [Vector3<Complex64>; 3]) -> (Vector3<Complex64>, f64) {
    candidates
        .into_iter()
        .map(|v| {
            let n = norm(&v);
            (v, n)
        })
        .fold((Vector3::zeros(), 0.0), |best, cand| {
            if cand.1 > best.1 {
                cand
            } else {
                best
            }
        })
}

/// A vector spanning (part of) the null space of a singular matrix.
fn null_vector(m: &Matrix3<Complex64>) -> Vector3<Complex64> {
    let rows = [0, 1, 2].map(|i| m.row(i).transpose());

    // Rank 2: the cross product of two independent rows is orthogonal to all three
    let (v, n) = longest([
        cross(&rows[1], &rows[2]),
        cross(&rows[2], &rows[0]),
        cross(&rows[0], &rows[1]),
    ]);
    if n > RANK_TOLERANCE {
        return normalize(&v);
    }

    // Rank 1 (degenerate eigenvalue): anything orthogonal to the dominant row
    let (r, n) = longest(rows);
    if n > RANK_TOLERANCE {
        let k = (0..3)
            .min_by(|&a, &b| r[a].norm().total_cmp(&r[b].norm()))
            .unwrap_or(2);
        let mut axis = Vector3::zeros();
        axis[k] = Complex64::new(1.0, 0.0);
        return normalize(&cross(&r, &axis));
    }

    // Rank 0: M = λI, every vector is an eigenvector
    Vector3::new(
        Complex64::new(0.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(1.0, 0.0),
    )
}

fn normalize(v: &Vector3<Complex64>) -> Vector3<Complex64> {
    let length = norm(v);
    let pivot = v.iter().fold(Complex64::new(0.0, 0.0), |best, c| {
        if c.norm() > best.norm() {
            *c
        } else {
            best
        }
    });
    let phase = pivot.conj() / pivot.norm();
    v.map(|c| c * phase / length)
}

/// Scale an axis to smallest-integer-ratio form: divide by the smallest
/// non-zero component magnitude, then make the first non-zero component
/// positive. Components that are zero within tolerance become exactly 0.
pub fn unitize(v: &Vector3<f64>) -> Vector3<f64> {
    let smallest = v
        .iter()
        .map(|x| x.abs())
        .filter(|x| *x > OPERATOR_TOLERANCE)
        .fold(f64::INFINITY, f64::min);
    if !smallest.is_finite() {
        return Vector3::zeros();
    }

    let mut axis = v.map(|x| if x.abs() > OPERATOR_TOLERANCE { x / smallest } else { 0.0 });
    if axis.iter().find(|x| **x != 0.0).map_or(false, |x| *x < 0.0) {
        axis = axis.map(|x| if x == 0.0 { 0.0 } else { -x });
    }
    axis
}
