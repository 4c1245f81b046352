//! Blocking alert shown when an RSVP could not be sent

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "RSVP not sent",
            accent: Color::Red,
            message: error_message,
            hint: Some(dismiss_hint("", "dismiss")),
            max_width: 60,
        },
    );
}
