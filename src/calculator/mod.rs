//! Calculator module implementing a keypad calculator.
//!
//! This module provides functionality to:
//! - Apply keypad actions to the calculator state
//! - Evaluate the pending binary operation
//! - Format operands for display
//! - Parse key sequences and copy results to the clipboard

mod action;
mod clipboard;
mod evaluation;
mod format;
mod keys;
mod number;
mod state;
mod store;

pub use action::{Action, Digit, Operation};
pub use clipboard::copy_to_clipboard;
pub use evaluation::evaluate;
pub use format::{DEFAULT_SEPARATOR, format_operand, format_operand_with};
pub use keys::{action_for_char, parse_keys};
pub use number::{parse_prefix, parse_whole, to_canonical_string};
pub use state::{CalculatorState, transition};
pub use store::{Display, HistoryEntry, Store};
