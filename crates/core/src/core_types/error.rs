//! Errors reported by the checked vector operations.
//!
//! The plain operators and methods never fail; they follow IEEE-754 and
//! let NaN/inf propagate. Only [`Vector::try_normalized`] and
//! [`Vector::checked_div`] surface these.

use std::fmt;

use super::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// Normalization of a vector whose components are all zero
    ZeroLength,
    /// A NaN or infinite component in the input or the result
    NonFinite { vector: Vector },
    /// Scalar division by zero
    DivideByZero,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::ZeroLength => write!(f, "Cannot normalize a zero-length vector"),
            VectorError::NonFinite { vector } => {
                write!(f, "Vector has non-finite components ({vector})")
            }
            VectorError::DivideByZero => write!(f, "Cannot divide a vector by zero"),
        }
    }
}

impl std::error::Error for VectorError {}
