// Coset module: Contains Flack's coset decomposition of a supergroup by a subgroup
// This module marks which supergroup operators remain independent coset representatives

// ======================== MODULE DECLARATIONS ========================
pub mod decomposition;

// Test modules
mod _tests_decomposition;

// ======================== COSET DECOMPOSITION ========================
pub use decomposition::{
    CosetSummary,                   // struct - counts of what the decomposition looked at and the coset index
    algorithm_a,                    // fn(supergroup: &mut OperatorSet, subgroup: &OperatorSet) -> CosetSummary - general case
    algorithm_b,                    // fn(supergroup: &mut OperatorSet, subgroup: &OperatorSet, extended: bool) -> CosetSummary - centrosymmetric case
    decompose,                      // fn(algorithm: Algorithm, supergroup: &mut OperatorSet, subgroup: &OperatorSet) -> CosetSummary
};
