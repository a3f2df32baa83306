use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};

/// Degree of a polynomial.
///
/// The zero polynomial has degree negative infinity, which orders below every
/// finite degree.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Degree {
    NegativeInfinity,
    Finite(usize),
}

impl Degree {
    /// Returns the finite degree, or `None` for the zero polynomial.
    pub const fn finite(self) -> Option<usize> {
        match self {
            Self::NegativeInfinity => None,
            Self::Finite(d) => Some(d),
        }
    }

    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<usize> for Degree {
    fn from(d: usize) -> Self {
        Self::Finite(d)
    }
}

impl PartialOrd for Degree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.finite().cmp(&other.finite())
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinity => f.write_str("-∞"),
            Self::Finite(d) => Display::fmt(d, f),
        }
    }
}
