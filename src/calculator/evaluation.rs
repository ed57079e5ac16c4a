//! Binary arithmetic on string operands.

use super::action::Operation;
use super::number::{parse_prefix, to_canonical_string};

/// Evaluate `previous <operation> current`.
///
/// Both operands are read by their leading numeric prefix. If either one
/// does not start with a number the result is the empty string. Division by
/// zero is not guarded and yields `Infinity`, `-Infinity` or `NaN`.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_prefix(previous), parse_prefix(current)) else {
        return String::new();
    };

    to_canonical_string(operation.apply(lhs, rhs))
}
