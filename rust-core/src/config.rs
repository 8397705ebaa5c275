// Constants

// Tolerances
pub const OPERATOR_TOLERANCE: f64 = 1e-7; // Entries of symmetry operators must be -1, 0 or 1 within this
pub const EIGEN_IMAGINARY_TOLERANCE: f64 = 1e-7; // Largest imaginary part still treated as real
pub const SINGULAR_MATRIX_TOLERANCE: f64 = 1e-10; // For inversion of lattice transformation matrices

// Eigen solver limits
pub const EIGEN_CONVERGENCE_EPS: f64 = f64::EPSILON;
pub const EIGEN_MAX_ITERATIONS: usize = 1000;
