//! Success overlay

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

const SUCCESS_MESSAGE: &str = "Thank you! Your RSVP has been received.\nWe can't wait to see you there.";

/// Render the success overlay; it closes itself after a few seconds
pub fn render_success_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "RSVP sent!",
            accent: Color::Green,
            message: SUCCESS_MESSAGE,
            hint: Some(dismiss_hint(" (or click)", "close")),
            max_width: 56,
        },
    );
}
