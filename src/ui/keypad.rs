//! Keypad layout, rendering and hit-testing.
//!
//! The grid is four columns by five rows:
//!
//! ```text
//! [   AC   ][DEL][ ÷ ]
//! [ 1 ][ 2 ][ 3 ][ * ]
//! [ 4 ][ 5 ][ 6 ][ + ]
//! [ 7 ][ 8 ][ 9 ][ - ]
//! [ . ][ 0 ][    =   ]
//! ```

use crate::calculator::{Action, Digit, Operation};
use crate::ui::theme::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const COLUMNS: u16 = 4;
pub const ROWS: u16 = 5;

/// Visual category of a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ButtonKind {
    Digit,
    Operation,
    Command,
    Evaluate,
}

/// A keypad button and its position in the grid.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub row: u16,
    pub column: u16,
    pub span: u16,
    kind: ButtonKind,
}

const fn digit(label: &'static str, c: char, row: u16, column: u16) -> Button {
    Button {
        label,
        action: Action::AddDigit(Digit::from_char_unchecked(c)),
        row,
        column,
        span: 1,
        kind: ButtonKind::Digit,
    }
}

const fn operation(op: Operation, label: &'static str, row: u16) -> Button {
    Button {
        label,
        action: Action::ChooseOperation(op),
        row,
        column: 3,
        span: 1,
        kind: ButtonKind::Operation,
    }
}

pub const BUTTONS: [Button; 18] = [
    Button {
        label: "AC",
        action: Action::Clear,
        row: 0,
        column: 0,
        span: 2,
        kind: ButtonKind::Command,
    },
    Button {
        label: "DEL",
        action: Action::DeleteDigit,
        row: 0,
        column: 2,
        span: 1,
        kind: ButtonKind::Command,
    },
    operation(Operation::Divide, "÷", 0),
    digit("1", '1', 1, 0),
    digit("2", '2', 1, 1),
    digit("3", '3', 1, 2),
    operation(Operation::Multiply, "*", 1),
    digit("4", '4', 2, 0),
    digit("5", '5', 2, 1),
    digit("6", '6', 2, 2),
    operation(Operation::Add, "+", 2),
    digit("7", '7', 3, 0),
    digit("8", '8', 3, 1),
    digit("9", '9', 3, 2),
    operation(Operation::Subtract, "-", 3),
    digit(".", '.', 4, 0),
    digit("0", '0', 4, 1),
    Button {
        label: "=",
        action: Action::Evaluate,
        row: 4,
        column: 2,
        span: 2,
        kind: ButtonKind::Evaluate,
    },
];

impl Button {
    /// Screen area of this button inside the keypad `area`.
    pub fn rect(&self, area: Rect) -> Rect {
        let cell_width = area.width / COLUMNS;
        let cell_height = area.height / ROWS;
        let x = area.x + self.column * cell_width;
        // The last column absorbs the rounding remainder.
        let width = if self.column + self.span == COLUMNS {
            area.width - self.column * cell_width
        } else {
            self.span * cell_width
        };

        Rect {
            x,
            y: area.y + self.row * cell_height,
            width,
            height: cell_height,
        }
    }

    fn style(&self) -> Style {
        let t = theme();
        match self.kind {
            ButtonKind::Digit => t.digit_button,
            ButtonKind::Operation => t.operation_button,
            ButtonKind::Command => t.command_button,
            ButtonKind::Evaluate => t.evaluate_button,
        }
    }
}

/// Index of the first button that produces `action`.
pub fn index_of(action: Action) -> Option<usize> {
    BUTTONS.iter().position(|b| b.action == action)
}

/// The action of the button under the cell `(column, row)`, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Action> {
    BUTTONS
        .iter()
        .find(|button| {
            let rect = button.rect(area);
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|button| button.action)
}

/// Render the keypad grid, highlighting the button at `pressed`.
pub fn render_keypad(frame: &mut Frame, area: Rect, pressed: Option<usize>) {
    let t = theme();

    for (index, button) in BUTTONS.iter().enumerate() {
        let rect = button.rect(area);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let style = if pressed == Some(index) {
            t.pressed_button
        } else {
            button.style()
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(t.border);

        // Vertically center the label inside the border.
        let inner_height = rect.height.saturating_sub(2);
        let padding = "\n".repeat((inner_height.saturating_sub(1) / 2) as usize);

        let paragraph = Paragraph::new(format!("{}{}", padding, button.label))
            .alignment(Alignment::Center)
            .style(style)
            .block(block);

        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keypad_action_has_a_button() {
        for label in ["0", "1", "9", ".", "+", "-", "*", "÷", "AC", "DEL", "="] {
            let action = Action::from_key(label).unwrap();
            let index = index_of(action).unwrap();
            assert_eq!(BUTTONS[index].label, label);
        }
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let mut cells = [[false; COLUMNS as usize]; ROWS as usize];
        for button in &BUTTONS {
            for column in button.column..button.column + button.span {
                let cell = &mut cells[button.row as usize][column as usize];
                assert!(!*cell, "overlap at {} {}", button.row, column);
                *cell = true;
            }
        }
        assert!(cells.iter().flatten().all(|&filled| filled));
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 10, 40, 15);
        // Cells are 10 wide and 3 tall.
        assert_eq!(hit_test(area, 0, 10), Some(Action::Clear));
        assert_eq!(hit_test(area, 15, 11), Some(Action::Clear));
        assert_eq!(hit_test(area, 25, 10), Some(Action::DeleteDigit));
        assert_eq!(hit_test(area, 12, 13), Action::from_key("2"));
        assert_eq!(hit_test(area, 39, 24), Some(Action::Evaluate));
        assert_eq!(hit_test(area, 5, 9), None);
        assert_eq!(hit_test(area, 5, 25), None);
    }

    #[test]
    fn test_last_column_absorbs_remainder() {
        let area = Rect::new(0, 0, 42, 15);
        let divide = &BUTTONS[index_of(Action::from_key("÷").unwrap()).unwrap()];
        assert_eq!(divide.rect(area).width, 12);
    }
}
