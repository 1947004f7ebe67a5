//! Toolbar component
//!
//! App title on the left; angle mode and theme toggles on the right.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::{Action, AngleMode, ThemePreference};

use crate::Message;

/// Render the toolbar
pub fn view_toolbar(theme: ThemePreference, angle_mode: AngleMode) -> Element<'static, Message> {
    // The theme button names the theme it switches to
    let theme_label = theme.toggled().display_name();

    row![
        text("SciCalc").size(20),
        Space::new().width(Length::Fill),
        button(text(angle_mode.label()).size(11))
            .on_press(Message::Press(Action::ToggleAngleMode))
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
