//! Display and history panel rendering.

use crate::calculator::{Display, HistoryEntry};
use crate::ui::theme::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Paragraph};

/// Render the two-line display: previous operand with the operator above
/// the current operand.
pub fn render_display(frame: &mut Frame, area: Rect, display: &Display) {
    let t = theme();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(t.border);

    let lines = vec![
        Line::styled(display.previous.clone(), t.previous_operand),
        Line::styled(display.current.clone(), t.current_operand),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render completed evaluations, newest first.
pub fn render_history<'a>(
    frame: &mut Frame,
    area: Rect,
    history: impl Iterator<Item = &'a HistoryEntry>,
) {
    let t = theme();

    let items: Vec<ListItem> = history
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(entry.expression.clone(), t.history_expression)),
                Line::from(Span::styled(format!("= {}", entry.result), t.history_result)),
            ])
        })
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(t.border)
        .title(Span::styled(" History ", t.title));

    frame.render_widget(List::new(items).block(block), area);
}
