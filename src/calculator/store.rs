//! Owner of the calculator state.
//!
//! The store holds the single [`CalculatorState`] value and replaces it on
//! every dispatch. It also keeps a short history of completed evaluations
//! and produces the formatted display lines.

use super::action::Action;
use super::clipboard::copy_to_clipboard;
use super::format::format_operand_with;
use super::state::{CalculatorState, transition};
use crate::config::Config;
use std::collections::VecDeque;

/// The two display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Display {
    /// Formatted previous operand followed by a space and the operator.
    pub previous: String,
    /// Formatted current operand.
    pub current: String,
}

/// A completed evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The expression that was evaluated, e.g. `"7 + 3"`.
    pub expression: String,
    /// The raw result string.
    pub result: String,
}

pub struct Store {
    state: CalculatorState,
    history: VecDeque<HistoryEntry>,
    config: Config,
}

impl Store {
    pub fn new(config: Config) -> Self {
        Self {
            state: CalculatorState::default(),
            history: VecDeque::new(),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Completed evaluations, newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// Dispatch an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = transition(&self.state, action);

        if next == self.state {
            tracing::trace!(key = %action.label(), "no-op transition");
            return false;
        }

        tracing::debug!(key = %action.label(), from = ?self.state, to = ?next, "transition");

        if action == Action::Evaluate {
            self.record_evaluation(&next);
        }

        self.state = next;
        true
    }

    /// Dispatch each action in order. Returns how many changed the state.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> usize {
        actions
            .into_iter()
            .filter(|&action| self.dispatch(action))
            .count()
    }

    /// The formatted display lines for the current state.
    pub fn display(&self) -> Display {
        let separator = self.config.separator.as_str();
        let previous = format_operand_with(self.state.previous_operand.as_deref(), separator)
            .unwrap_or_default();
        let operation = self.state.operation.map(|op| op.symbol()).unwrap_or("");

        Display {
            previous: format!("{} {}", previous, operation),
            current: format_operand_with(self.state.current_operand.as_deref(), separator)
                .unwrap_or_default(),
        }
    }

    /// Text that a copy command puts on the clipboard: the raw current
    /// operand, or the pending left-hand operand when nothing is typed yet.
    pub fn copy_text(&self) -> Option<&str> {
        self.state
            .current_operand
            .as_deref()
            .or(self.state.previous_operand.as_deref())
            .filter(|text| !text.is_empty())
    }

    fn record_evaluation(&mut self, next: &CalculatorState) {
        let result = next.current_operand.clone().unwrap_or_default();
        let entry = HistoryEntry {
            expression: self.state.expression(),
            result,
        };
        tracing::info!(expression = %entry.expression, result = %entry.result, "evaluated");

        if self.config.copy_on_evaluate
            && !entry.result.is_empty()
            && let Err(e) = copy_to_clipboard(&entry.result)
        {
            tracing::warn!("Failed to copy result: {}", e);
        }

        if self.config.history_size == 0 {
            return;
        }
        self.history.push_front(entry);
        self.history.truncate(self.config.history_size);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::parse_keys;

    fn store_after(keys: &str) -> Store {
        let mut store = Store::default();
        store.dispatch_all(parse_keys(keys).unwrap());
        store
    }

    #[test]
    fn test_dispatch_reports_changes() {
        let mut store = Store::default();
        assert!(!store.dispatch(Action::Evaluate));
        assert!(!store.dispatch(Action::DeleteDigit));
        assert!(store.dispatch(Action::from_key("5").unwrap()));
        assert!(store.dispatch(Action::from_key(".").unwrap()));
        assert!(!store.dispatch(Action::from_key(".").unwrap()));
        assert_eq!(store.state().current_operand.as_deref(), Some("5."));
    }

    #[test]
    fn test_dispatch_all_counts_changes() {
        let mut store = Store::default();
        let changed = store.dispatch_all(parse_keys("00=1").unwrap());
        // "0", then the rejected second "0", then an incomplete "=", then "1".
        assert_eq!(changed, 2);
        assert_eq!(store.state().current_operand.as_deref(), Some("01"));
    }

    #[test]
    fn test_display_lines() {
        let store = store_after("1234+56");
        assert_eq!(
            store.display(),
            Display {
                previous: "1,234 +".to_string(),
                current: "56".to_string(),
            }
        );

        let store = store_after("");
        assert_eq!(store.display().previous, " ");
        assert_eq!(store.display().current, "");
    }

    #[test]
    fn test_display_uses_configured_separator() {
        let mut store = Store::new(Config {
            separator: ".".to_string(),
            ..Config::default()
        });
        store.dispatch_all(parse_keys("1000000").unwrap());
        assert_eq!(store.display().current, "1.000.000");
    }

    #[test]
    fn test_history_records_evaluations() {
        let store = store_after("7+3=*2=");
        let history: Vec<_> = store.history().cloned().collect();
        assert_eq!(
            history,
            vec![
                HistoryEntry {
                    expression: "10 * 2".to_string(),
                    result: "20".to_string(),
                },
                HistoryEntry {
                    expression: "7 + 3".to_string(),
                    result: "10".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_history_is_bounded() {
        let mut store = Store::new(Config {
            history_size: 2,
            ..Config::default()
        });
        store.dispatch_all(parse_keys("1+1=+1=+1=").unwrap());
        let results: Vec<_> = store.history().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["4", "3"]);
    }

    #[test]
    fn test_copy_text() {
        assert_eq!(store_after("").copy_text(), None);
        assert_eq!(store_after("12+").copy_text(), Some("12"));
        assert_eq!(store_after("12+3=").copy_text(), Some("15"));
    }
}
