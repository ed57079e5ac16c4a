//! Actions dispatched to the calculator state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single digit key: `0`-`9` or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// The decimal point key.
    pub const POINT: Digit = Digit('.');
    /// The zero key.
    pub const ZERO: Digit = Digit('0');

    /// Create a digit from a character, returning `None` for anything that
    /// is not `0`-`9` or `.`.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            Some(Self(c))
        } else {
            None
        }
    }

    /// Build a digit from a character already known to be valid.
    pub(crate) const fn from_char_unchecked(c: char) -> Self {
        Self(c)
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four supported binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// The symbol shown on the keypad and in the display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator symbol.
    ///
    /// Besides the keypad symbols this accepts the keyboard aliases `/` for
    /// division and `x` / `×` for multiplication.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "x" | "X" | "×" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An input event for the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Append a digit (or decimal point) to the current operand.
    AddDigit(Digit),
    /// Pick the operator for the pending binary operation.
    ChooseOperation(Operation),
    /// Reset to the empty state.
    Clear,
    /// Remove the last character of the current operand.
    DeleteDigit,
    /// Compute the pending operation.
    Evaluate,
}

impl Action {
    /// Map a keypad label to its action.
    ///
    /// `AC` and `DEL` are matched case-insensitively.
    pub fn from_key(label: &str) -> Option<Self> {
        let label = label.trim();

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(digit) = Digit::new(c)
        {
            return Some(Self::AddDigit(digit));
        }

        if let Some(op) = Operation::from_symbol(label) {
            return Some(Self::ChooseOperation(op));
        }

        match label.to_ascii_uppercase().as_str() {
            "AC" => Some(Self::Clear),
            "DEL" => Some(Self::DeleteDigit),
            "=" => Some(Self::Evaluate),
            _ => None,
        }
    }

    /// The keypad label that produces this action.
    pub fn label(&self) -> String {
        match self {
            Self::AddDigit(d) => d.to_string(),
            Self::ChooseOperation(op) => op.symbol().to_string(),
            Self::Clear => "AC".to_string(),
            Self::DeleteDigit => "DEL".to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_validation() {
        assert!(Digit::new('0').is_some());
        assert!(Digit::new('9').is_some());
        assert!(Digit::new('.').unwrap().is_point());
        assert!(Digit::new('a').is_none());
        assert!(Digit::new('+').is_none());
    }

    #[test]
    fn test_operation_symbols() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("x"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("%"), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Action::from_key("7"), Some(Action::AddDigit(Digit('7'))));
        assert_eq!(Action::from_key("."), Some(Action::AddDigit(Digit::POINT)));
        assert_eq!(
            Action::from_key("÷"),
            Some(Action::ChooseOperation(Operation::Divide))
        );
        assert_eq!(Action::from_key("ac"), Some(Action::Clear));
        assert_eq!(Action::from_key("DEL"), Some(Action::DeleteDigit));
        assert_eq!(Action::from_key("="), Some(Action::Evaluate));
        assert_eq!(Action::from_key("12"), None);
        assert_eq!(Action::from_key("sqrt"), None);
    }

    #[test]
    fn test_label_round_trips_through_from_key() {
        let action = Action::ChooseOperation(Operation::Multiply);
        assert_eq!(Action::from_key(&action.label()), Some(action));
        assert_eq!(Action::from_key(&Action::Clear.label()), Some(Action::Clear));
    }
}
