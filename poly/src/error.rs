//! Error types for parsing and dividing polynomials.

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by the polynomial core.
///
/// Addition, subtraction and multiplication are total, so the only failures are
/// malformed input and division by the zero polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A token could not be read as a finite real number.
    #[error("'{token}' is not a valid coefficient")]
    InvalidCoefficient {
        /// The offending token, as it was given.
        token: String,
    },

    /// The divisor normalized to the zero polynomial.
    #[error("cannot divide by the zero polynomial")]
    DivisionByZero,

    /// The input text contained no coefficients at all.
    #[error("the input is empty")]
    EmptyInput,
}

impl PolyError {
    pub fn invalid_coefficient(token: impl Into<String>) -> Self {
        Self::InvalidCoefficient {
            token: token.into(),
        }
    }
}

/// Result type alias for polynomial operations.
pub type PolyResult<T> = core::result::Result<T, PolyError>;
