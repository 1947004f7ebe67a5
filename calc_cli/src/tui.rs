//! Interactive terminal keypad.
//!
//! Layout:
//! - Display block: expression trace above the current value, right aligned
//! - Key help: every binding, with the last pressed action highlighted
//! - Status line: angle mode, pending operation, save messages

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};

use calc_core::format::format_result;
use calc_core::preferences::save_preferences;
use calc_core::{Action, CalculatorEngine, Preferences, ThemePreference};

use crate::keymap::{command_for_key, Command, FUNCTION_KEYS};

/// Keys shared with the GUI, as (key label, action code) for the help panel
const SHARED_KEYS: [(&str, &str); 11] = [
    ("0-9", "digits"),
    (".", "decimal"),
    ("+", "add"),
    ("-", "subtract"),
    ("*", "multiply"),
    ("/", "divide"),
    ("^", "power"),
    ("Enter =", "equals"),
    ("Esc c", "clear"),
    ("Bksp", "clear-entry"),
    ("% !", "percent factorial"),
];

/// Colors for one theme
struct Palette {
    base: Style,
    dim: Style,
    highlight: Style,
}

impl Palette {
    fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Palette {
                base: Style::default().fg(Color::Black).bg(Color::White),
                dim: Style::default().fg(Color::DarkGray).bg(Color::White),
                highlight: Style::default().fg(Color::White).bg(Color::Blue),
            },
            ThemePreference::Dark => Palette {
                base: Style::default().fg(Color::White).bg(Color::Black),
                dim: Style::default().fg(Color::Gray).bg(Color::Black),
                highlight: Style::default().fg(Color::Black).bg(Color::Cyan),
            },
        }
    }
}

/// TUI application state
pub struct TuiApp {
    engine: CalculatorEngine,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    status: String,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        TuiApp {
            engine: CalculatorEngine::with_angle_mode(prefs.angle_mode),
            prefs,
            prefs_path,
            status: "F2 theme · m RAD/DEG · Ctrl+C quit".to_string(),
            should_quit: false,
        }
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        info!("terminal keypad started");
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(command) = command_for_key(key) {
                        self.handle_command(command);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Press(action) => {
                self.engine.dispatch(action);
                if matches!(action, Action::SetAngleMode(_) | Action::ToggleAngleMode) {
                    self.prefs.angle_mode = self.engine.angle_mode();
                    self.persist_preferences();
                }
            }
            Command::ToggleTheme => {
                self.prefs.theme = self.prefs.theme.toggled();
                self.persist_preferences();
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn persist_preferences(&mut self) {
        let Some(path) = &self.prefs_path else {
            return;
        };
        match save_preferences(&self.prefs, path) {
            Ok(()) => self.status = "Preferences saved".to_string(),
            Err(e) => {
                warn!(error = %e, "could not save preferences");
                self.status = format!("Could not save preferences: {}", e);
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.prefs.theme);
        let [display_area, keys_area, status_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let display = Paragraph::new(vec![
            Line::from(self.engine.expression().to_string())
                .right_aligned()
                .style(palette.dim),
            Line::from(self.engine.display().to_string())
                .right_aligned()
                .style(palette.base.add_modifier(Modifier::BOLD)),
        ])
        .block(Block::bordered().title(" SciCalc "))
        .style(palette.base);
        frame.render_widget(display, display_area);

        let keys = Paragraph::new(self.key_help_lines(&palette))
            .block(Block::bordered().title(" Keys "))
            .style(palette.base)
            .wrap(Wrap { trim: true });
        frame.render_widget(keys, keys_area);

        let status = Line::from(vec![
            Span::styled(format!(" {} ", self.engine.angle_mode().label()), palette.highlight),
            Span::styled(format!(" {} ", self.pending_summary()), palette.base),
            Span::styled(self.status.clone(), palette.dim),
        ]);
        frame.render_widget(Paragraph::new(status).style(palette.base), status_area);
    }

    fn key_help_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        let last = self.engine.last_action().map(|action| action.code());
        let is_last = |code: &str| {
            last.as_deref().is_some_and(|last| {
                code.split(' ').any(|c| c == last)
                    || (code == "digits" && last.chars().all(|c| c.is_ascii_digit()))
            })
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (key, code) in SHARED_KEYS {
            let style = if is_last(code) { palette.highlight } else { palette.base };
            spans.push(Span::styled(format!("[{}] {}", key, code), style));
            spans.push(Span::raw("  "));
        }
        let shared = Line::from(spans);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (key, action) in FUNCTION_KEYS {
            let code = action.code();
            let style = if is_last(&code) { palette.highlight } else { palette.base };
            spans.push(Span::styled(format!("[{}] {}", key, action.label()), style));
            spans.push(Span::raw("  "));
        }
        let functions = Line::from(spans);

        vec![shared, Line::raw(""), functions]
    }

    fn pending_summary(&self) -> String {
        let state = self.engine.state();
        match (state.first_operand, state.operator) {
            (Some(first), Some(op)) => format!("{} {}", format_result(first), op.symbol()),
            (None, Some(op)) => op.symbol().to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{AngleMode, BinaryOperator};

    #[test]
    fn test_commands_drive_engine() {
        let mut app = TuiApp::new(Preferences::default(), None);
        for c in ['7', '+', '9'] {
            let action = calc_core::keymap::action_for_key(&c.to_string()).unwrap();
            app.handle_command(Command::Press(action));
        }
        assert_eq!(app.engine.display(), "9");
        assert_eq!(app.pending_summary(), "7 +");

        app.handle_command(Command::Press(Action::Equals));
        assert_eq!(app.engine.display(), "16");
    }

    #[test]
    fn test_angle_mode_follows_preferences() {
        let prefs = Preferences {
            angle_mode: AngleMode::Degrees,
            ..Preferences::default()
        };
        let mut app = TuiApp::new(prefs, None);
        assert_eq!(app.engine.angle_mode(), AngleMode::Degrees);

        app.handle_command(Command::Press(Action::ToggleAngleMode));
        assert_eq!(app.prefs.angle_mode, AngleMode::Radians);
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = TuiApp::new(Preferences::default(), None);
        app.handle_command(Command::ToggleTheme);
        assert_eq!(app.prefs.theme, ThemePreference::Dark);

        app.handle_command(Command::Press(Action::Operator(BinaryOperator::Add)));
        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }
}
