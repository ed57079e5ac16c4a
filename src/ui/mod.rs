pub mod app;
pub mod display;
pub mod keypad;
pub mod theme;

pub use app::{CalculatorApp, Command, run_calculator};
pub use theme::{CalculatorTheme, theme};
