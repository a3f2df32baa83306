//! Univariate polynomials with real (`f64`) coefficients.
//!
//! A [`Polynomial`] is normalized on construction and never mutated afterwards:
//! every arithmetic operation builds a fresh value. Coefficients are compared
//! with exact floating-point equality, so results that should cancel but pick up
//! rounding residue (e.g. `1e-16` instead of `0`) are kept as nonzero terms.

#![no_std]

extern crate alloc;

mod degree;
mod display;
mod error;
mod ops;


#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::str::FromStr;

pub use degree::*;
pub use error::*;
use itertools::{EitherOrBoth, Itertools};
use tracing::{instrument, trace};

/// Polynomial stored as a list of coefficients
#[derive(Clone, PartialEq)]
pub struct Polynomial {
    // The coefficient of `x^i` is stored at location `i` in `self.coeffs`.
    // Never empty; the last entry is nonzero unless the polynomial is `[0.0]`.
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the zero polynomial
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Returns the constant polynomial 1
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    pub fn constant(constant: f64) -> Self {
        Self::from_coeffs(vec![constant])
    }

    /// Returns the monic polynomial of degree 1 with no constant term
    pub fn x() -> Self {
        Self {
            coeffs: vec![0.0, 1.0],
        }
    }

    /// Builds a polynomial from its coefficients, lowest power first, trimming
    /// trailing zeros. An empty vector gives the zero polynomial.
    ///
    /// The coefficients are expected to be finite; use [`Polynomial::parse`] for
    /// untrusted input.
    pub fn from_coeffs(mut coeffs: Vec<f64>) -> Self {
        trim_trailing_zeros(&mut coeffs);
        Self { coeffs }
    }

    /// Parses one coefficient per token, lowest power first.
    ///
    /// Fails with [`PolyError::InvalidCoefficient`] on the first token that is not
    /// a finite real number. An empty token list gives the zero polynomial.
    pub fn parse<I>(tokens: I) -> PolyResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let coeffs = tokens
            .into_iter()
            .map(|token| parse_coefficient(token.as_ref()))
            .collect::<PolyResult<Vec<_>>>()?;
        Ok(Self::from_coeffs(coeffs))
    }

    pub fn degree(&self) -> Degree {
        if self.is_zero() {
            Degree::NegativeInfinity
        } else {
            Degree::Finite(self.coeffs.len() - 1)
        }
    }

    pub fn is_zero(&self) -> bool {
        degree_of(&self.coeffs).is_none()
    }

    /// The coefficient of the highest power; `0.0` for the zero polynomial.
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs.last().copied().unwrap_or(0.0)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a + b)
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a - b)
    }

    // Pads the shorter operand with zeros and combines coefficient-wise.
    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(&other.coeffs)
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => op(a, b),
                EitherOrBoth::Left(&a) => op(a, 0.0),
                EitherOrBoth::Right(&b) => op(0.0, b),
            })
            .collect();
        Self::from_coeffs(coeffs)
    }

    #[instrument(level = "debug", skip_all, fields(lhs = %self.degree(), rhs = %other.degree()))]
    pub fn multiply(&self, other: &Self) -> Self {
        let (Some(lhs_deg), Some(rhs_deg)) = (self.degree().finite(), other.degree().finite())
        else {
            return Self::zero();
        };

        let mut coeffs = vec![0.0; lhs_deg + rhs_deg + 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        Self::from_coeffs(coeffs)
    }

    /// Euclidean long division: returns `(quotient, remainder)` such that
    /// `self = quotient * divisor + remainder`, where the remainder is zero or has
    /// degree strictly below the divisor's.
    #[instrument(level = "debug", skip_all, fields(dividend = %self.degree(), divisor = %divisor.degree()))]
    pub fn divide(&self, divisor: &Self) -> PolyResult<(Self, Self)> {
        let Some(d_deg) = divisor.degree().finite() else {
            return Err(PolyError::DivisionByZero);
        };

        let n_deg = match self.degree().finite() {
            Some(n_deg) if n_deg >= d_deg => n_deg,
            _ => return Ok((Self::zero(), self.clone())),
        };

        let divisor_leading_coeff = divisor.leading_coefficient();
        let mut quotient_coeffs = vec![0.0; n_deg - d_deg + 1];
        let mut remainder = self.coeffs.clone();

        while let Some(r_deg) = degree_of(&remainder).filter(|&r_deg| r_deg >= d_deg) {
            let cur_q_coeff = remainder[r_deg] / divisor_leading_coeff;
            let cur_q_degree = r_deg - d_deg;
            quotient_coeffs[cur_q_degree] = cur_q_coeff;

            for (r, &div_coeff) in remainder[cur_q_degree..].iter_mut().zip(&divisor.coeffs) {
                *r -= cur_q_coeff * div_coeff;
            }
            // The leading term cancels exactly; drop any rounding residue.
            remainder[r_deg] = 0.0;
            trim_trailing_zeros(&mut remainder);

            trace!(cur_q_degree, cur_q_coeff, "eliminated leading term");
        }

        Ok((
            Self::from_coeffs(quotient_coeffs),
            Self::from_coeffs(remainder),
        ))
    }

    /// The quotient half of [`Polynomial::divide`].
    pub fn quotient(&self, divisor: &Self) -> PolyResult<Self> {
        self.divide(divisor).map(|(q, _)| q)
    }

    /// The remainder half of [`Polynomial::divide`].
    pub fn remainder(&self, divisor: &Self) -> PolyResult<Self> {
        self.divide(divisor).map(|(_, r)| r)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs).finish()
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    /// Parses whitespace-separated coefficients, lowest power first. Blank input
    /// is rejected with [`PolyError::EmptyInput`].
    fn from_str(s: &str) -> PolyResult<Self> {
        let mut tokens = s.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(PolyError::EmptyInput);
        }
        Self::parse(tokens)
    }
}

fn parse_coefficient(token: &str) -> PolyResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite())
        .ok_or_else(|| PolyError::invalid_coefficient(token))
}

/// Pops trailing zeros, keeping at least one entry.
fn trim_trailing_zeros(coeffs: &mut Vec<f64>) {
    while coeffs.len() > 1 && coeffs.last() == Some(&0.0) {
        coeffs.pop();
    }
    if coeffs.is_empty() {
        coeffs.push(0.0);
    }
}

// Degree of a trimmed coefficient list, `None` for `[0.0]`.
fn degree_of(coeffs: &[f64]) -> Option<usize> {
    match coeffs {
        [c] if *c == 0.0 => None,
        _ => Some(coeffs.len() - 1),
    }
}
