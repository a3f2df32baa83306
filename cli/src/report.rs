use polycalc_poly::{PolyError, PolyResult, Polynomial};
use tracing::{debug, instrument};

use crate::parsers::Operation;

/// Parses both inputs, applies `op` and renders the result.
///
/// The report is an operation line followed by the result, e.g.
///
/// ```text
/// Sum: (x + 1) + (x - 1)
/// = 2x
/// ```
///
/// Nothing is rendered unless the whole computation succeeds.
#[instrument(level = "debug", skip_all, fields(op = ?op))]
pub fn run(op: Operation, lhs: &str, rhs: &str) -> PolyResult<String> {
    let p1: Polynomial = lhs.parse()?;
    let p2: Polynomial = rhs.parse()?;
    debug!(lhs = ?p1, rhs = ?p2, "parsed operands");
    report(op, &p1, &p2)
}

pub fn report(op: Operation, p1: &Polynomial, p2: &Polynomial) -> PolyResult<String> {
    Ok(match op {
        Operation::Add => format!("Sum: ({p1}) + ({p2})\n= {}", p1.add(p2)),
        Operation::Sub => format!("Difference: ({p1}) - ({p2})\n= {}", p1.subtract(p2)),
        Operation::Mul => format!("Product: ({p1}) * ({p2})\n= {}", p1.multiply(p2)),
        Operation::Div => {
            let (q, r) = p1.divide(p2)?;
            format!("Division: ({p1}) / ({p2})\nQuotient:  {q}\nRemainder: {r}")
        }
    })
}

/// The message shown to the user for a failed computation.
pub fn describe_error(err: &PolyError) -> String {
    match err {
        PolyError::DivisionByZero => "Error: cannot divide by the zero polynomial.".into(),
        PolyError::InvalidCoefficient { .. } | PolyError::EmptyInput => {
            format!("Input error: {err}")
        }
    }
}
