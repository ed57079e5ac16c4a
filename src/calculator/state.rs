//! The calculator state machine.

use super::action::{Action, Digit, Operation};
use super::evaluation::evaluate;
use serde::{Deserialize, Serialize};

/// Everything the calculator remembers between key presses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Digits being typed, or the result of the last evaluation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_operand: Option<String>,
    /// Left-hand side of the pending operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_operand: Option<String>,
    /// Pending operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
    /// Set after an evaluation so the next digit replaces the result.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// Whether `Evaluate` would produce a result.
    pub fn can_evaluate(&self) -> bool {
        self.operation.is_some()
            && self.previous_operand.is_some()
            && self.current_operand.is_some()
    }

    /// The pending expression as typed, e.g. `"7 + 3"`.
    pub fn expression(&self) -> String {
        [
            self.previous_operand.as_deref(),
            self.operation.map(Operation::symbol),
            self.current_operand.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn pending_result(&self) -> String {
        match (&self.previous_operand, &self.current_operand, self.operation) {
            (Some(previous), Some(current), Some(op)) => evaluate(previous, current, op),
            _ => String::new(),
        }
    }
}

/// Compute the state that follows `state` when `action` is dispatched.
///
/// Total and side-effect free. Actions whose preconditions are not met
/// return an unchanged copy of `state`.
pub fn transition(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");

    if digit == Digit::ZERO && current == "0" {
        return state.clone();
    }
    if digit.is_point() && current.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(format!("{}{}", current, digit)),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),
        // Operator picked again before the second operand: swap it.
        (None, Some(_)) => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        },
        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(state.pending_result()),
            operation: Some(op),
            current_operand: None,
            ..state.clone()
        },
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = &state.current_operand else {
        return state.clone();
    };

    let mut chars = current.chars();
    let single = chars.next_back().is_some() && chars.as_str().is_empty();

    // Only a one-character operand disappears; an empty one stays empty.
    CalculatorState {
        current_operand: if single {
            None
        } else {
            Some(chars.as_str().to_string())
        },
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if !state.can_evaluate() {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(state.pending_result()),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
