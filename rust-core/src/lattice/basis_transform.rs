use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::CosetError;
use crate::lattice::matrix_kernel::{inverse, similarity_transform_with_inverse};
use crate::symmetries::operator_codec::Fingerprint;

/// Matrix that takes the subgroup's lattice basis onto the supergroup's lattice basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeTransform {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
    fingerprint: Fingerprint,
}

impl LatticeTransform {
    pub fn new(matrix: Matrix3<f64>) -> Result<Self, CosetError> {
        // The inverse is needed for every transform, so singular matrices are rejected up front
        let inverse = inverse(&matrix)?;

        Ok(LatticeTransform {
            matrix,
            inverse,
            fingerprint: Fingerprint::encode(&matrix),
        })
    }

    pub fn identity() -> Self {
        let matrix = Matrix3::identity();
        LatticeTransform {
            matrix,
            inverse: matrix,
            fingerprint: Fingerprint::encode(&matrix),
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix3<f64> {
        &self.inverse
    }

    /// Fingerprint of the transformation matrix. `Fingerprint::ERROR` for
    /// transformations with non-integral entries.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    pub fn is_identity(&self) -> bool {
        self.fingerprint == Fingerprint::IDENTITY
    }

    /// The inverse transformation, taking the supergroup's basis back to the subgroup's.
    pub fn inverted(&self) -> LatticeTransform {
        LatticeTransform {
            matrix: self.inverse,
            inverse: self.matrix,
            fingerprint: Fingerprint::encode(&self.inverse),
        }
    }

    /// `T · m · T⁻¹`
    pub fn apply(&self, m: &Matrix3<f64>) -> Matrix3<f64> {
        similarity_transform_with_inverse(m, &self.matrix, &self.inverse)
    }
}

impl Default for LatticeTransform {
    fn default() -> Self {
        Self::identity()
    }
}
