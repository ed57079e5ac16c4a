//! Interactive terminal calculator.

use crate::calculator::{Action, Store, action_for_char, copy_to_clipboard};
use crate::config::Config;
use crate::ui::display::{render_display, render_history};
use crate::ui::keypad::{self, render_keypad};
use crate::ui::theme::theme;
use anyhow::{Context, Result};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

const HELP: &str = "0-9 . + - * / │ Enter = │ Bksp DEL │ Esc AC │ y copy │ q quit";

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    Copy,
    Quit,
}

/// Map a key event to a command. Unknown keys map to `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Command::Dispatch(Action::Evaluate)),
        KeyCode::Backspace => Some(Command::Dispatch(Action::DeleteDigit)),
        KeyCode::Esc | KeyCode::Delete => Some(Command::Dispatch(Action::Clear)),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Dispatch(Action::Clear)),
        KeyCode::Char('y') => Some(Command::Copy),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char(c) => action_for_char(c).map(Command::Dispatch),
        _ => None,
    }
}

/// State of the interactive view.
pub struct CalculatorApp {
    store: Store,
    /// Button highlighted until the next event.
    pressed: Option<usize>,
    status: Option<String>,
    keypad_area: Rect,
    should_quit: bool,
}

impl CalculatorApp {
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::new(config),
            pressed: None,
            status: None,
            keypad_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        self.pressed = None;

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(command) = command_for_key(key) {
                    self.run_command(command);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(action) = keypad::hit_test(self.keypad_area, mouse.column, mouse.row) {
            self.run_command(Command::Dispatch(action));
        }
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::Dispatch(action) => {
                self.pressed = keypad::index_of(action);
                self.status = None;
                self.store.dispatch(action);
            }
            Command::Copy => self.copy(),
            Command::Quit => self.should_quit = true,
        }
    }

    fn copy(&mut self) {
        let Some(text) = self.store.copy_text().map(str::to_string) else {
            self.status = Some("Nothing to copy".to_string());
            return;
        };

        self.status = Some(match copy_to_clipboard(&text) {
            Ok(()) => format!("Copied {}", text),
            Err(e) => {
                tracing::warn!("Failed to copy to clipboard: {}", e);
                "Clipboard unavailable".to_string()
            }
        });
    }

    /// Draw the whole view.
    pub fn render(&mut self, frame: &mut Frame) {
        let t = theme();

        let [main, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [calculator, history] =
            Layout::horizontal([Constraint::Min(24), Constraint::Length(28)]).areas(main);
        let [display, keypad_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(calculator);

        self.keypad_area = keypad_area;

        render_display(frame, display, &self.store.display());
        render_keypad(frame, keypad_area, self.pressed);
        render_history(frame, history, self.store.history());

        let status_text = self.status.as_deref().unwrap_or(HELP);
        frame.render_widget(Paragraph::new(status_text).style(t.status), status);
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| self.render(frame))
                .context("Failed to draw calculator")?;
            let event = event::read().context("Failed to read terminal event")?;
            self.handle_event(event);
        }

        Ok(())
    }
}

/// Open the terminal keypad and block until it is closed.
pub fn run_calculator(config: Config) -> Result<()> {
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture).context("Failed to enable mouse capture")?;

    tracing::info!("calculator started");
    let result = CalculatorApp::new(config).run(&mut terminal);

    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        tracing::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    tracing::info!("calculator closed");

    result
}
