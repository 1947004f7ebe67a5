//! Display Panel
//!
//! Shows the expression trace (small, gray) above the current display value,
//! both right aligned like a physical calculator.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the display panel
pub fn view_display_panel<'a>(expression: &'a str, display: &'a str) -> Element<'a, Message> {
    let content = column![
        text(expression).size(14).color([0.5, 0.5, 0.5]),
        text(display).size(36),
    ]
    .spacing(4)
    .width(Length::Fill)
    .align_x(Alignment::End);

    container(content)
        .width(Length::Fill)
        .padding(12)
        .style(container::bordered_box)
        .into()
}
