//! Operator overloads, each forwarding to the named method on [`Polynomial`].
//!
//! `/` and `%` panic on a zero divisor, like integer division. Use
//! [`Polynomial::divide`] to handle that case.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::Polynomial;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $body:expr) => {
        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $body(self, rhs)
            }
        }

        impl $trait for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                $body(&self, &rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: &Polynomial) -> Polynomial {
                $body(&self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, Polynomial::add);
forward_binop!(Sub, sub, Polynomial::subtract);
forward_binop!(Mul, mul, Polynomial::multiply);
forward_binop!(Div, div, |lhs: &Polynomial, rhs: &Polynomial| {
    lhs.quotient(rhs).unwrap_or_else(|e| panic!("{e}"))
});
forward_binop!(Rem, rem, |lhs: &Polynomial, rhs: &Polynomial| {
    lhs.remainder(rhs).unwrap_or_else(|e| panic!("{e}"))
});

impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) {
        *self = Polynomial::add(self, rhs);
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) {
        *self = self.subtract(rhs);
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = self.multiply(rhs);
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(self) -> Polynomial {
        Polynomial::from_coeffs(self.coeffs().iter().map(|c| -c).collect())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    #[inline]
    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |acc, p| &acc + &p)
    }
}

impl Product for Polynomial {
    fn product<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::one(), |acc, p| &acc * &p)
    }
}
