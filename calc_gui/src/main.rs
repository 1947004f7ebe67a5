//! # SciCalc GUI Application
//!
//! Desktop keypad for the SciCalc engine, built with Iced.
//!
//! Every button press and recognized key becomes a `calc_core::Action`
//! dispatched to a single `CalculatorEngine`. Theme and angle mode are
//! persisted to the user's preferences file whenever they change.

mod keyboard;
mod ui;

use std::path::PathBuf;

use iced::widget::{column, rule};
use iced::{event, Element, Subscription, Task, Theme};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use calc_core::preferences::{default_preferences_path, load_or_default, save_preferences};
use calc_core::{Action, CalculatorEngine, Preferences};

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("Starting SciCalc GUI");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((400.0, 640.0))
        .run()
}

/// Messages produced by the UI and keyboard
#[derive(Debug, Clone)]
pub enum Message {
    /// A calculator button or key press
    Press(Action),
    /// Switch between light and dark themes
    ToggleDarkMode,
}

/// Application state
pub struct App {
    engine: CalculatorEngine,
    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let prefs_path = default_preferences_path();
        let prefs = match &prefs_path {
            Some(path) => load_or_default(path),
            None => Preferences::default(),
        };
        (Self::with_preferences(prefs, prefs_path), Task::none())
    }

    fn with_preferences(prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        Self {
            engine: CalculatorEngine::with_angle_mode(prefs.angle_mode),
            prefs,
            prefs_path,
            status: String::new(),
        }
    }

    fn title(&self) -> String {
        format!("SciCalc ({})", self.engine.angle_mode().label())
    }

    fn theme(&self) -> Theme {
        if self.prefs.theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(keyboard::handle_event)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Press(action) => {
                self.engine.dispatch(action);
                self.status.clear();

                if matches!(action, Action::SetAngleMode(_) | Action::ToggleAngleMode) {
                    self.prefs.angle_mode = self.engine.angle_mode();
                    self.persist_preferences();
                }
            }
            Message::ToggleDarkMode => {
                self.prefs.theme = self.prefs.theme.toggled();
                self.persist_preferences();
            }
        }
        Task::none()
    }

    fn persist_preferences(&mut self) {
        let Some(path) = &self.prefs_path else {
            return;
        };
        match save_preferences(&self.prefs, path) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(e) => {
                warn!(error = %e, "Failed to save preferences");
                self.status = format!("Preferences not saved: {}", e);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_toolbar(self.prefs.theme, self.engine.angle_mode()),
            ui::display_panel::view_display_panel(self.engine.expression(), self.engine.display()),
            ui::keypad::view_keypad(self.engine.last_action()),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(self.engine.state(), &self.status),
        ]
        .spacing(8)
        .padding(12)
        .into()
    }
}
