//! Colors and styles for the terminal keypad.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the calculator view.
pub struct CalculatorTheme {
    pub border: Style,
    pub title: Style,
    pub previous_operand: Style,
    pub current_operand: Style,
    pub digit_button: Style,
    pub operation_button: Style,
    pub command_button: Style,
    pub evaluate_button: Style,
    pub pressed_button: Style,
    pub history_expression: Style,
    pub history_result: Style,
    pub status: Style,
}

static THEME: CalculatorTheme = CalculatorTheme {
    border: Style::new().fg(Color::DarkGray),
    title: Style::new().fg(Color::Gray),
    previous_operand: Style::new().fg(Color::Gray),
    current_operand: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    digit_button: Style::new().fg(Color::White),
    // Blue-ish accent for operators, matching the "=" badge
    operation_button: Style::new().fg(Color::Rgb(110, 170, 230)),
    command_button: Style::new().fg(Color::Rgb(230, 140, 100)),
    evaluate_button: Style::new()
        .fg(Color::Rgb(110, 170, 230))
        .add_modifier(Modifier::BOLD),
    pressed_button: Style::new().fg(Color::Black).bg(Color::Rgb(110, 170, 230)),
    history_expression: Style::new().fg(Color::DarkGray),
    history_result: Style::new().fg(Color::White),
    status: Style::new().fg(Color::DarkGray),
};

/// The active theme.
pub fn theme() -> &'static CalculatorTheme {
    &THEME
}
