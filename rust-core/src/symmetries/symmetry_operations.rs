use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::OPERATOR_TOLERANCE;
use crate::error::CosetError;
use crate::interfaces::Centricity;
use crate::lattice::basis_transform::LatticeTransform;
use crate::lattice::matrix_kernel::{approx_equal, determinant, multiply, negate};
use crate::symmetries::operator_codec::Fingerprint;

/// Rotation type of a point symmetry operator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    /// Order of the rotation axis; negative for rotoinversions (-1 inversion center, -2 mirror).
    pub fold: i32,
    /// Rotation angle in degrees
    pub rotation_angle: f64,
    /// The real eigenvalue whose sign matches the determinant
    pub eigen_value: f64,
    /// Rotation axis in smallest-integer-ratio form
    pub axis: Vector3<f64>,
}

impl Classification {
    pub fn is_proper(&self) -> bool {
        self.fold > 0
    }
}

/// A point symmetry operator together with its coset bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryOperator {
    matrix: Matrix3<f64>,
    fingerprint: Fingerprint,
    /// Still an independent coset representative
    pub is_representative: bool,
    pub classification: Option<Classification>,
}

impl SymmetryOperator {
    pub fn new(matrix: Matrix3<f64>) -> Self {
        SymmetryOperator {
            fingerprint: Fingerprint::encode(&matrix),
            matrix,
            is_representative: true,
            classification: None,
        }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    pub fn from_fingerprint(fingerprint: Fingerprint) -> Result<Self, CosetError> {
        Ok(Self::new(fingerprint.decode()?))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Replace the matrix; the fingerprint follows it.
    pub fn set_matrix(&mut self, matrix: Matrix3<f64>) {
        self.matrix = matrix;
        self.fingerprint = Fingerprint::encode(&matrix);
    }

    pub fn is_identity(&self) -> bool {
        self.fingerprint == Fingerprint::IDENTITY
    }

    pub fn is_inversion(&self) -> bool {
        self.fingerprint == Fingerprint::INVERSION
    }

    /// Product `self · other`
    pub fn compose(&self, other: &SymmetryOperator) -> SymmetryOperator {
        SymmetryOperator::new(multiply(&self.matrix, &other.matrix))
    }

    /// The inversion-related partner `-self`
    pub fn negated(&self) -> SymmetryOperator {
        SymmetryOperator::new(negate(&self.matrix))
    }

    /// Whether the matrix equals its transpose. Compared through fingerprints
    /// for integral operators and element-wise otherwise.
    pub fn is_symmetric(&self) -> bool {
        let transposed = self.matrix.transpose();
        if !self.fingerprint.is_error() {
            return Fingerprint::encode(&transposed) == self.fingerprint;
        }
        self.matrix
            .iter()
            .zip(transposed.iter())
            .all(|(a, b)| approx_equal(*a, *b, OPERATOR_TOLERANCE))
    }

    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.matrix * point
    }
}

/// An ordered finite set of point symmetry operators, identity first.
///
/// Sets built from the catalog keep the proper rotations in the first half and
/// their products with the inversion center, in the same order, in the second
/// half. Algorithm B relies on that layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatorSet {
    operators: Vec<SymmetryOperator>,
}

impl OperatorSet {
    pub fn new(operators: Vec<SymmetryOperator>) -> Self {
        OperatorSet { operators }
    }

    /// Build a set from matrices, rejecting any that do not encode as operators.
    pub fn from_matrices(matrices: &[Matrix3<f64>]) -> Result<Self, CosetError> {
        let operators = matrices
            .iter()
            .map(|m| Fingerprint::try_encode(m).map(|_| SymmetryOperator::new(*m)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OperatorSet { operators })
    }

    /// Expand proper rotations with the inversion center: the result holds the
    /// proper rotations followed by their inversion partners in the same order.
    pub fn from_proper(proper: &[Matrix3<f64>]) -> Self {
        let mut operators: Vec<SymmetryOperator> =
            proper.iter().map(|m| SymmetryOperator::new(*m)).collect();
        // m · (-1) is a sign flip of the non-zero entries
        operators.extend(proper.iter().map(|m| SymmetryOperator::new(negate(m))));
        OperatorSet { operators }
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn operators(&self) -> &[SymmetryOperator] {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> &mut [SymmetryOperator] {
        &mut self.operators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymmetryOperator> {
        self.operators.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SymmetryOperator> {
        self.operators.get(index)
    }

    pub fn push(&mut self, op: SymmetryOperator) {
        self.operators.push(op);
    }

    pub fn centricity(&self) -> Centricity {
        if self.operators.iter().any(SymmetryOperator::is_inversion) {
            Centricity::Centric
        } else {
            Centricity::Acentric
        }
    }

    pub fn is_centric(&self) -> bool {
        self.centricity() == Centricity::Centric
    }

    pub fn starts_with_identity(&self) -> bool {
        self.operators.first().map_or(false, SymmetryOperator::is_identity)
    }

    pub fn set_all_active(&mut self, active: bool) {
        for op in &mut self.operators {
            op.is_representative = active;
        }
    }

    /// Number of operators still marked as coset representatives.
    pub fn active_count(&self) -> usize {
        self.operators.iter().filter(|op| op.is_representative).count()
    }

    pub fn representatives(&self) -> impl Iterator<Item = &SymmetryOperator> {
        self.operators.iter().filter(|op| op.is_representative)
    }

    /// Change the basis of every operator. Fingerprints are re-derived.
    pub fn transform(&mut self, transform: &LatticeTransform) {
        for op in &mut self.operators {
            let transformed = transform.apply(op.matrix());
            op.set_matrix(transformed);
        }
    }

    /// Fails on the first operator that does not encode as {-1, 0, 1}.
    pub fn validate_encoding(&self) -> Result<(), CosetError> {
        for op in &self.operators {
            Fingerprint::try_encode(op.matrix())?;
        }
        Ok(())
    }

    /// Reorder a centric set into its proper rotations, in their original order,
    /// followed by the inversion partner of each. Acentric sets are returned as
    /// they are.
    pub fn into_centric_layout(self) -> Result<Self, CosetError> {
        if !self.is_centric() {
            return Ok(self);
        }

        let (proper, improper): (Vec<_>, Vec<_>) = self
            .operators
            .into_iter()
            .partition(|op| determinant(op.matrix()) > 0.0);
        if proper.len() != improper.len() {
            return Err(CosetError::UnbalancedCentricSet {
                proper: proper.len(),
                improper: improper.len(),
            });
        }

        let mut partners = Vec::with_capacity(improper.len());
        for op in &proper {
            let wanted = op.fingerprint().negated();
            let partner = improper
                .iter()
                .find(|p| p.fingerprint() == wanted)
                .ok_or(CosetError::MissingInversionPartner(op.fingerprint().bits()))?;
            partners.push(partner.clone());
        }

        let mut operators = proper;
        operators.extend(partners);
        Ok(OperatorSet { operators })
    }
}

impl<'a> IntoIterator for &'a OperatorSet {
    type Item = &'a SymmetryOperator;
    type IntoIter = std::slice::Iter<'a, SymmetryOperator>;

    fn into_iter(self) -> Self::IntoIter {
        self.operators.iter()
    }
}
