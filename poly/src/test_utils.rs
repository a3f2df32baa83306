use alloc::vec::Vec;

use rand::Rng;

use crate::Polynomial;

// In order to use this auxiliary functionality, activate the `test-utils`
// feature

/// Returns a random polynomial of the exact given degree, with coefficients in
/// `[-10, 10)`.
pub fn rand_poly<R: Rng>(rng: &mut R, degree: usize) -> Polynomial {
    let mut coeffs: Vec<f64> = (0..degree).map(|_| rng.random_range(-10.0..10.0)).collect();

    let mut leading_coeff = 0.0;

    while leading_coeff == 0.0 {
        leading_coeff = rng.random_range(-10.0..10.0);
    }

    coeffs.push(leading_coeff);

    Polynomial::from_coeffs(coeffs)
}

/// Returns a random polynomial of the given degree with small integer
/// coefficients and a leading coefficient of `1` or `-1`.
///
/// Long division by such a polynomial stays exact in `f64`, which makes it a
/// suitable divisor when checking `q * d + r == p` with exact equality.
pub fn rand_monic_int_poly<R: Rng>(rng: &mut R, degree: usize) -> Polynomial {
    let mut coeffs: Vec<f64> = (0..degree)
        .map(|_| f64::from(rng.random_range(-9i32..=9)))
        .collect();

    coeffs.push(if rng.random_bool(0.5) { 1.0 } else { -1.0 });

    Polynomial::from_coeffs(coeffs)
}

/// Returns a random polynomial of degree at most `max_degree` with integer
/// coefficients in `[-20, 20]`. May be the zero polynomial.
pub fn rand_int_poly<R: Rng>(rng: &mut R, max_degree: usize) -> Polynomial {
    let len = rng.random_range(0..=max_degree + 1);
    Polynomial::from_coeffs(
        (0..len)
            .map(|_| f64::from(rng.random_range(-20i32..=20)))
            .collect(),
    )
}
