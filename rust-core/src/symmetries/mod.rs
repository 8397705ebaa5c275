// Symmetries module: Contains point symmetry operators, their encoding and classification
// This module provides the operator catalog and the trace/eigenvector analysis of twin laws

// ======================== MODULE DECLARATIONS ========================
pub mod eigen;
pub mod operator_analysis;
pub mod operator_codec;
pub mod point_groups;
pub mod symmetry_operations;

// Test modules
mod _tests_operator_analysis;
mod _tests_symmetry_operations;

// ======================== OPERATOR ENCODING ========================
pub use operator_codec::Fingerprint; // struct - 2 bits per element packing of a {-1,0,1} matrix
// Fingerprint impl methods:
//   try_encode(m: &Matrix3<f64>) -> Result<Fingerprint, CosetError> - encodes, failing on non-integral entries
//   encode(m: &Matrix3<f64>) -> Fingerprint                          - encodes, ERROR on non-integral entries
//   decode(self) -> Result<Matrix3<f64>, CosetError>                 - exact inverse of encode
//   negated(self) -> Fingerprint                                     - fingerprint of the sign-flipped matrix
//   bit_string(self) -> String                                       - bits grouped by byte, for diagnostics

// ======================== OPERATORS & OPERATOR SETS ========================
pub use symmetry_operations::{
    Classification,                 // struct - fold, rotation angle, eigenvalue and axis of an operator
    OperatorSet,                    // struct - ordered operator list, identity first
    SymmetryOperator,               // struct - matrix, fingerprint, representative flag, classification
};
// OperatorSet impl methods:
//   from_matrices(matrices: &[Matrix3<f64>]) -> Result<Self, CosetError> - validated construction
//   from_proper(proper: &[Matrix3<f64>]) -> Self                   - proper rotations then inversion partners
//   centricity(&self) -> Centricity                                - whether the inversion center is present
//   active_count(&self) -> usize                                   - number of coset representatives
//   transform(&mut self, transform: &LatticeTransform)             - change of basis, fingerprints re-derived
//   into_centric_layout(self) -> Result<Self, CosetError>          - proper rotations first, inversion partners after

// ======================== POINT-GROUP CATALOG ========================
pub use point_groups::{
    PointGroup,                     // enum - the seven holoaxial groups 1, 2, 222, 422, 32, 622, 432
    lookup_by_name,                 // fn(name: &str) -> Result<u32, CosetError> - holohedry symbol to group id
    resolve_group,                  // fn(name: &str) -> Result<OperatorSet, CosetError> - holohedry or rotation group by name
    select_operators,               // fn(id: u32) -> Result<OperatorSet, CosetError> - full holohedry by group id
};

// ======================== EIGEN ANALYSIS ========================
pub use eigen::{
    ComplexEigenPair,               // struct - eigenvalue and eigenvector of a general real matrix
    RealEigenPair,                  // struct - real eigenvalue and eigenvector
    general_eigen_solve,            // fn(m: &Matrix3<f64>) -> Result<[ComplexEigenPair; 3], CosetError> - Schur based
    symmetric_eigen_solve,          // fn(m: &Matrix3<f64>) -> Result<[RealEigenPair; 3], CosetError> - symmetric matrices
    unitize,                        // fn(v: &Vector3<f64>) -> Vector3<f64> - smallest-integer-ratio form
};

pub use operator_analysis::{
    analyze_group,                  // fn(set: &mut OperatorSet) -> Result<(), CosetError> - classify active operators
    analyze_operator,               // fn(op: &mut SymmetryOperator) -> Result<(), CosetError> - classify one operator
    classify,                       // fn(m: &Matrix3<f64>, symmetric: bool) -> Result<Classification, CosetError>
    fold_from_trace_determinant,    // fn(trace: i32, determinant: i32) -> Option<i32> - rotation order table
};
