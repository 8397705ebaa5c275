// Lattice module: Contains 3x3 matrix arithmetic and changes of lattice basis
// This module provides the linear algebra the symmetry operators are transformed with

// ======================== MODULE DECLARATIONS ========================
pub mod basis_transform;
pub mod matrix_kernel;


// ======================== MATRIX KERNEL ========================
pub use matrix_kernel::{
    approx_equal,                   // fn(a: f64, b: f64, tol: f64) -> bool - relative comparison with a unit floor
    determinant,                    // fn(m: &Matrix3<f64>) -> f64
    from_row_major,                 // fn(values: &[f64; 9]) -> Matrix3<f64> - 11 12 13 21 ... 33 order
    inverse,                        // fn(m: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> - rejects singular matrices
    inverse_transpose,              // fn(m: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> - direct to reciprocal rotation
    multiply,                       // fn(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64>
    negate,                         // fn(m: &Matrix3<f64>) -> Matrix3<f64> - sign flip of non-zero entries
    similarity_transform,           // fn(m: &Matrix3<f64>, t: &Matrix3<f64>) -> Result<Matrix3<f64>, CosetError> - t m t⁻¹
    trace,                          // fn(m: &Matrix3<f64>) -> f64
};

// ======================== BASIS TRANSFORMATION ========================
pub use basis_transform::LatticeTransform; // struct - subgroup to supergroup basis change with cached inverse
// LatticeTransform impl methods:
//   new(matrix: Matrix3<f64>) -> Result<Self, CosetError>          - fails for singular matrices
//   apply(&self, m: &Matrix3<f64>) -> Matrix3<f64>                 - T · m · T⁻¹
//   inverted(&self) -> LatticeTransform                            - the transformation back
//   fingerprint(&self) -> Fingerprint                              - ERROR for non-integral transformations
