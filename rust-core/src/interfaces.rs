// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

use crate::error::CosetError;

// Flack's coset decomposition algorithms (Acta Cryst. (1987), A43, 564-568)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    A,
    B,
    // Algorithm B followed by re-activation of the inversion partners of every
    // representative when the subgroup is acentric
    ExtendedB,
}

impl Algorithm {
    /// Parse the argument of an `ALGORITHM` directive, e.g. `"A"`, `"b"` or `"B EXTENDED"`.
    pub fn from_directive(arg: &str) -> Result<Self, CosetError> {
        let mut tokens = arg.split_whitespace();
        let letter = tokens
            .next()
            .ok_or_else(|| CosetError::UnknownAlgorithm(String::new()))?;
        let extended = tokens
            .next()
            .map(|t| t.eq_ignore_ascii_case("EXTENDED"))
            .unwrap_or(false);

        match letter.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(Algorithm::A),
            Some('B') if extended => Ok(Algorithm::ExtendedB),
            Some('B') => Ok(Algorithm::B),
            _ => Err(CosetError::UnknownAlgorithm(letter.to_string())),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Algorithm::A => 'A',
            Algorithm::B | Algorithm::ExtendedB => 'B',
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::ExtendedB => write!(f, "B (extended)"),
            _ => write!(f, "{}", self.letter()),
        }
    }
}

// Whether a point group contains the inversion center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Centricity {
    Centric,
    Acentric,
}

impl Centricity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Centricity::Centric => "centric",
            Centricity::Acentric => "acentric",
        }
    }
}

// Output format of task reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
