//! UI module for rendering the TUI

mod components;
pub mod forms;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

pub use layout::form_viewport_height;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, form_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);
    forms::draw_rsvp_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays, alert on top
    let surface = app.controller.presenter();
    if surface.success_visible {
        render_success_dialog(frame);
    }
    if let Some(message) = &surface.alert {
        render_error_dialog(frame, message);
    }
}
