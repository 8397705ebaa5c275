//! Flack coset decomposition library
//!
//! This library finds the potential twin laws of a crystal from the left coset
//! decomposition of a lattice's point group by the crystal's point group, following
//! H. D. Flack, Acta Cryst. (1987), A43, 564-568. It reads COSET job files, classifies
//! the resulting twin operators and writes SHELX TWIN/BASF instructions.

pub mod config;
pub mod coset;
pub mod error;
pub mod interfaces;
pub mod jobs;
pub mod lattice;
pub mod symmetries;

pub use error::{CosetError, ErrorKind};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, CosetError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
