use nalgebra::Matrix3;

use crate::config::{OPERATOR_TOLERANCE, SINGULAR_MATRIX_TOLERANCE};
use crate::error::CosetError;

/// Relative comparison with a unit floor, so values near zero are compared absolutely.
pub fn approx_equal(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

pub fn is_zero(a: f64) -> bool {
    approx_equal(a, 0.0, OPERATOR_TOLERANCE)
}

/// Round half away from zero.
pub fn round_to_nearest_int(f: f64) -> i32 {
    f.round() as i32
}

pub fn determinant(m: &Matrix3<f64>) -> f64 {
    m.determinant()
}

pub fn trace(m: &Matrix3<f64>) -> f64 {
    m.trace()
}

pub fn transpose(m: &Matrix3<f64>) -> Matrix3<f64> {
    m.transpose()
}

pub fn multiply(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a * b
}

pub fn add(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a + b
}

pub fn subtract(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a - b
}

/// Inverse of a 3x3 matrix. Near-singular matrices are rejected instead of
/// producing huge entries.
pub fn inverse(m: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> {
    let det = m.determinant();
    if det.abs() < SINGULAR_MATRIX_TOLERANCE {
        return Err(CosetError::SingularMatrix(det));
    }
    m.try_inverse().ok_or(CosetError::SingularMatrix(det))
}

/// (m⁻¹)ᵀ: maps a direct-space rotation onto its reciprocal-space counterpart.
pub fn inverse_transpose(m: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> {
    inverse(m).map(|inv| inv.transpose())
}

/// Flip the sign of every non-zero entry. Zero entries are kept as +0.0 so
/// the result never carries a negative zero.
pub fn negate(m: &Matrix3<f64>) -> Matrix3<f64> {
    m.map(|x| if is_zero(x) { 0.0 } else { -x })
}

/// `t · m · t⁻¹`: expresses `m` in the basis reached through `t`.
pub fn similarity_transform(m: &Matrix3<f64>, t: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> {
    let inv = inverse(t)?;
    Ok(similarity_transform_with_inverse(m, t, &inv))
}

pub fn similarity_transform_with_inverse(
    m: &Matrix3<f64>,
    t: &Matrix3<f64>,
    t_inv: &Matrix3<f64>,
) -> Matrix3<f64> {
    t * (m * t_inv)
}

/// Build a matrix from nine values in row-major order (11 12 13 21 ... 33).
pub fn from_row_major(values: &[f64; 9]) -> Matrix3<f64> {
    Matrix3::from_row_slice(values)
}
