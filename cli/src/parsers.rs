//! Command line enums.
//!
//! Each variant can be given by its full name, by any prefix which fully
//! determines it, or by a few extra aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;

/// The arithmetic operation to apply to the two input polynomials.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

/// Produce a PossibleValue for an Enum variant.
///
/// We allow any prefix of the full name of length at least
/// `min_unique_base_prefix`, and for each alias any prefix of length at least
/// its paired minimum. For example `get_aliases("subtract", 1, Some(vec![("minus", 2)]))`
/// accepts:
///
/// ```text
/// s, su, sub, subt, subtr, subtra, subtrac, subtract, mi, min, minu, minus
/// ```
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    alias: Option<Vec<(&'static str, usize)>>,
) -> PossibleValue {
    let base_prefixes = (min_unique_base_prefix..base.len()).map(|i| &base[..i]);
    match alias {
        None => PossibleValue::new(base).aliases(base_prefixes),
        Some(vec) => PossibleValue::new(base).aliases(base_prefixes.chain(
            vec.into_iter().flat_map(|(alias, min_unique)| {
                (min_unique..alias.len() + 1).map(|i| &alias[..i])
            }),
        )),
    }
}

impl ValueEnum for Operation {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Operation::Add,
            Operation::Sub,
            Operation::Mul,
            Operation::Div,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Operation::Add => get_aliases("add", 1, Some(vec![("plus", 1)])),
            Operation::Sub => get_aliases("subtract", 1, Some(vec![("minus", 2)])),
            Operation::Mul => get_aliases("multiply", 2, Some(vec![("times", 1)])),
            Operation::Div => get_aliases("divide", 1, None),
        })
    }
}
