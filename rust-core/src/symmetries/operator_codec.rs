use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::CosetError;
use crate::lattice::matrix_kernel::approx_equal;
use crate::config::OPERATOR_TOLERANCE;

/// Bit-packed encoding of a 3x3 matrix with entries in {-1, 0, 1}.
///
/// Each element takes two bits, row-major, starting at bit 0 for `[0][0]`:
///
/// | value | code |
/// |-------|------|
/// |  0    | 0b00 |
/// | +1    | 0b01 |
/// | -1    | 0b10 |
///
/// Two operators are equal exactly when their fingerprints are equal, which
/// turns every matrix comparison in the coset enumeration into one integer
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(u32);

const BITS_PER_ELEMENT: u32 = 2;
const ELEMENT_MASK: u32 = 0b11;
const USED_BITS_MASK: u32 = (1 << 18) - 1;

impl Fingerprint {
    /// Returned for any matrix with an entry outside {-1, 0, 1}. Every element coded as -1.
    pub const ERROR: Fingerprint = Fingerprint(0x2aaaa);
    pub const INVERSION: Fingerprint = Fingerprint(0x20202);
    pub const IDENTITY: Fingerprint = Fingerprint(0x10101);

    fn offset(row: usize, col: usize) -> u32 {
        BITS_PER_ELEMENT * (3 * row + col) as u32
    }

    fn element_code(value: f64) -> Option<u32> {
        if approx_equal(value, 1.0, OPERATOR_TOLERANCE) {
            Some(0b01)
        } else if approx_equal(value, 0.0, OPERATOR_TOLERANCE) {
            Some(0b00)
        } else if approx_equal(value, -1.0, OPERATOR_TOLERANCE) {
            Some(0b10)
        } else {
            None
        }
    }

    /// Encode a matrix, reporting the first offending element.
    pub fn try_encode(m: &Matrix3<f64>) -> Result<Fingerprint, CosetError> {
        let mut code = 0u32;
        for row in 0..3 {
            for col in 0..3 {
                let value = m[(row, col)];
                let bits = Self::element_code(value)
                    .ok_or(CosetError::NonIntegralOperator { row, col, value })?;
                code |= bits << Self::offset(row, col);
            }
        }
        Ok(Fingerprint(code))
    }

    /// Encode a matrix; matrices that are not symmetry operators map to [`Fingerprint::ERROR`].
    pub fn encode(m: &Matrix3<f64>) -> Fingerprint {
        Self::try_encode(m).unwrap_or(Fingerprint::ERROR)
    }

    pub fn decode(self) -> Result<Matrix3<f64>, CosetError> {
        if self.0 & !USED_BITS_MASK != 0 {
            return Err(CosetError::InvalidFingerprint(self.0));
        }

        let mut m = Matrix3::zeros();
        for row in 0..3 {
            for col in 0..3 {
                m[(row, col)] = match (self.0 >> Self::offset(row, col)) & ELEMENT_MASK {
                    0b00 => 0.0,
                    0b01 => 1.0,
                    0b10 => -1.0,
                    _ => return Err(CosetError::InvalidFingerprint(self.0)),
                };
            }
        }
        Ok(m)
    }

    /// Fingerprint of the matrix with every non-zero entry sign-flipped,
    /// computed on the codes directly.
    pub fn negated(self) -> Fingerprint {
        let mut code = 0u32;
        for shift in (0..18).step_by(BITS_PER_ELEMENT as usize) {
            let bits = match (self.0 >> shift) & ELEMENT_MASK {
                0b01 => 0b10,
                0b10 => 0b01,
                other => other,
            };
            code |= bits << shift;
        }
        Fingerprint(code)
    }

    pub fn is_error(self) -> bool {
        self == Fingerprint::ERROR
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn from_bits(bits: u32) -> Fingerprint {
        Fingerprint(bits)
    }

    /// The 32 bits grouped in bytes, most significant first.
    pub fn bit_string(self) -> String {
        (0..4)
            .rev()
            .map(|byte| format!("{:08b}", (self.0 >> (8 * byte)) & 0xff))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}
