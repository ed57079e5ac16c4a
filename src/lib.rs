//! A keypad calculator: a pure state machine for button presses, a binary
//! evaluator, display formatting and a terminal front end.

pub mod calculator;
pub mod config;
pub mod error;
pub mod ui;

pub use config::Config;
pub use error::CalcError;
