use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};

use crate::Polynomial;

const VARIABLE: char = 'x';

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Significant digits kept when printing a coefficient.
const SIGNIFICANT_DIGITS: usize = 6;

/// Formats the polynomial in descending powers, e.g. `3x² + 2x - 5`.
///
/// Zero coefficients are skipped, a coefficient of magnitude 1 is only printed on
/// the constant term, and the zero polynomial prints as `0`.
impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (power, &coeff) in self.coeffs().iter().enumerate().rev() {
            if coeff == 0.0 {
                continue;
            }

            match (first, coeff > 0.0) {
                (true, true) => {}
                (true, false) => f.write_str("-")?,
                (false, true) => f.write_str(" + ")?,
                (false, false) => f.write_str(" - ")?,
            }
            first = false;

            let magnitude = coeff.abs();
            if magnitude != 1.0 || power == 0 {
                f.write_str(&format_general(magnitude))?;
            }

            match power {
                0 => {}
                1 => write!(f, "{VARIABLE}")?,
                _ => write!(f, "{VARIABLE}{}", superscript(power))?,
            }
        }

        Ok(())
    }
}

/// Renders `n` with Unicode superscript digits, e.g. `12` becomes `¹²`.
pub(crate) fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .map(|digit| SUPERSCRIPT_DIGITS[digit as usize])
        .collect()
}

/// Shortest general notation for a non-negative finite value, following the
/// C `%g` conversion: six significant digits, scientific notation when the
/// decimal exponent is below -4 or at least 6, trailing zeros removed.
pub(crate) fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }

    // The exponent has to be read after rounding to the target precision.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let precision = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.precision$}")).into()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
