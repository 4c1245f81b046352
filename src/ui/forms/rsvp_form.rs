//! RSVP form rendering and row geometry
//!
//! The form is a vertical stack of rows: one per field, then the submit
//! button. Rows grow by one line per error message. Scrolling works in
//! whole rows, starting from `App::scroll_offset`.

use super::field_renderer::{choice_option_at, draw_choice_field, draw_field};
use crate::app::App;
use crate::state::{FieldId, Form, FormField, SUBMIT_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::{form_viewport_height, FORM_INNER_LEFT, FORM_INNER_TOP};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line field box
const TEXT_HEIGHT: u16 = 3;
/// Height of the notes box
const MULTILINE_HEIGHT: u16 = 5;
/// Width of the submit button
const SUBMIT_WIDTH: u16 = 24;

/// Height of every row, fields first, submit button last
pub fn row_heights(app: &App) -> Vec<u16> {
    let form = app.controller.form();
    let surface = app.controller.presenter();
    let mut heights: Vec<u16> = FieldId::ALL
        .iter()
        .map(|id| {
            let base = if form.field(*id).is_multiline {
                MULTILINE_HEIGHT
            } else {
                TEXT_HEIGHT
            };
            let errors = surface.group(*id).map_or(0, |g| g.errors.len()) as u16;
            base + errors
        })
        .collect();
    heights.push(BUTTON_HEIGHT);
    heights
}

/// Row under a terminal line, if any. Lines below the form's inner area
/// (its bottom border and the status bar) never hit a row.
pub fn row_at(app: &App, screen_row: u16) -> Option<usize> {
    if screen_row < FORM_INNER_TOP {
        return None;
    }
    if let Some((height, _)) = app.terminal_size {
        if screen_row >= FORM_INNER_TOP + form_viewport_height(height) {
            return None;
        }
    }
    let heights = row_heights(app);
    let mut y = FORM_INNER_TOP;
    for (index, height) in heights.iter().enumerate().skip(app.scroll_offset) {
        if screen_row < y + height {
            return Some(index);
        }
        y += height;
    }
    None
}

/// Option of a choice field under a terminal column
pub fn option_at(field: &FormField, screen_column: u16) -> Option<usize> {
    if !field.is_choice() || screen_column < FORM_INNER_LEFT {
        return None;
    }
    choice_option_at(field, screen_column - FORM_INNER_LEFT)
}

/// Draw the RSVP form
pub fn draw_rsvp_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Your RSVP ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.controller.form();
    let surface = app.controller.presenter();
    let heights = row_heights(app);

    let mut y = inner.y;
    for (index, height) in heights.iter().enumerate().skip(app.scroll_offset) {
        if y >= inner.bottom() {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: (*height).min(inner.bottom() - y),
        };
        y += height;

        let is_active = form.active_field_index == index;
        if index == SUBMIT_ROW {
            let button = &surface.submit_button;
            let button_area = Rect {
                width: SUBMIT_WIDTH.min(row_area.width),
                ..row_area
            };
            render_button(frame, button_area, &button.label, is_active, button.enabled);
            continue;
        }

        let Some(field) = form.get_field(index) else {
            continue;
        };
        let id = field.id;
        if field.is_choice() {
            draw_choice_field(frame, row_area, field, is_active, surface.group(id));
        } else {
            draw_field(frame, row_area, field, is_active, surface.group(id));
        }
    }
}
