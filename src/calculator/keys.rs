//! Key sequence parsing.
//!
//! Turns typed input such as `"7+3="` or `"12 DEL AC"` into the actions a
//! user would have produced by pressing the keypad buttons one by one.

use super::action::Action;
use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One key per match: the word keys first, then any single character.
    /// Anything that is not a known key still matches as a single character
    /// so it can be reported with its position.
    static ref KEY_TOKEN: Regex = Regex::new(r"(?i)AC|DEL|\S").unwrap();
}

/// Parse a whole key sequence into actions.
///
/// Whitespace between keys is optional. The first unknown key aborts the
/// parse with [`CalcError::UnknownKey`].
pub fn parse_keys(input: &str) -> Result<Vec<Action>, CalcError> {
    KEY_TOKEN
        .find_iter(input)
        .map(|m| {
            Action::from_key(m.as_str()).ok_or_else(|| CalcError::UnknownKey {
                token: m.as_str().to_string(),
                position: input[..m.start()].chars().count(),
            })
        })
        .collect()
}

/// Map a single typed character to an action.
///
/// Accepts the keyboard spellings used in the interactive view: `,` acts as
/// the decimal point and `Enter`-like `=` evaluates.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        ',' => Action::from_key("."),
        _ => Action::from_key(c.encode_utf8(&mut [0; 4])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operation};

    fn digit(c: char) -> Action {
        Action::AddDigit(Digit::new(c).unwrap())
    }

    #[test]
    fn test_compact_sequence() {
        assert_eq!(
            parse_keys("7+3=").unwrap(),
            vec![
                digit('7'),
                Action::ChooseOperation(Operation::Add),
                digit('3'),
                Action::Evaluate,
            ]
        );
    }

    #[test]
    fn test_word_keys_and_whitespace() {
        assert_eq!(
            parse_keys("12 DEL ac").unwrap(),
            vec![digit('1'), digit('2'), Action::DeleteDigit, Action::Clear]
        );
        assert_eq!(parse_keys("1del").unwrap(), vec![digit('1'), Action::DeleteDigit]);
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!(
            parse_keys("6/3x2÷1").unwrap(),
            vec![
                digit('6'),
                Action::ChooseOperation(Operation::Divide),
                digit('3'),
                Action::ChooseOperation(Operation::Multiply),
                digit('2'),
                Action::ChooseOperation(Operation::Divide),
                digit('1'),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_keys("").unwrap(), vec![]);
        assert_eq!(parse_keys("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_unknown_key_reports_position() {
        match parse_keys("1 + q") {
            Err(CalcError::UnknownKey { token, position }) => {
                assert_eq!(token, "q");
                assert_eq!(position, 4);
            }
            other => panic!("expected unknown key error, got {:?}", other),
        }
    }

    #[test]
    fn test_action_for_char() {
        assert_eq!(action_for_char('5'), Some(digit('5')));
        assert_eq!(action_for_char(','), Some(digit('.')));
        assert_eq!(action_for_char('='), Some(Action::Evaluate));
        assert_eq!(action_for_char('q'), None);
    }
}
