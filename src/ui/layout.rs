//! Layout components (header, form area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmissionPhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the title header
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_HEIGHT: u16 = 1;
/// First terminal row inside the form's border
pub const FORM_INNER_TOP: u16 = HEADER_HEIGHT + 1;
/// First terminal column inside the form's border
pub const FORM_INNER_LEFT: u16 = 1;

/// Create the main layout: header, form, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Min(0),                // Form
            Constraint::Length(STATUS_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Rows available to form content on a terminal of the given height
pub fn form_viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + 2) // +2 for borders
}

/// Draw the event title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.config.event_title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

fn phase_color(phase: SubmissionPhase) -> Color {
    match phase {
        SubmissionPhase::Idle => Color::Green,
        SubmissionPhase::Submitting | SubmissionPhase::Validating => Color::Yellow,
        SubmissionPhase::Success { .. } => Color::Cyan,
        SubmissionPhase::Invalid | SubmissionPhase::Failed => Color::Red,
    }
}

/// Keyboard hints for whatever currently has focus
fn get_hints(app: &App) -> String {
    let surface = app.controller.presenter();
    if surface.alert.is_some() {
        return "Enter/Esc:dismiss".to_string();
    }
    if surface.success_visible {
        return "Enter/Esc/click:close".to_string();
    }

    let form = app.controller.form();
    let on_choice = form
        .active_field_id()
        .is_some_and(|id| form.field(id).is_choice());
    if on_choice {
        format!("Tab:next  ←/→ y/n:choose  {SUBMIT_SHORTCUT}:submit  Esc:quit")
    } else if form.is_submit_row_active() {
        "Tab:next  Enter:submit  Esc:quit".to_string()
    } else {
        format!("Tab:next  S-Tab:prev  {SUBMIT_SHORTCUT}:submit  PgUp/PgDn:scroll  Esc:quit")
    }
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let phase = app.controller.phase();
    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(phase_color(phase))),
        Span::styled(
            format!("{} ", phase.label()),
            Style::default().fg(Color::White),
        ),
        Span::raw("| "),
        Span::styled(get_hints(app), Style::default().fg(Color::Gray)),
    ];

    let errors = app.controller.presenter().error_count();
    if errors > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{errors} field(s) need attention"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_viewport_height() {
        assert_eq!(form_viewport_height(40), 34);
        assert_eq!(form_viewport_height(3), 0);
    }

    #[test]
    fn test_create_layout_reserves_header_and_status() {
        let (header, form, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(form.y, HEADER_HEIGHT);
        assert_eq!(form.height, 24 - HEADER_HEIGHT - STATUS_HEIGHT);
        assert_eq!(status.y, 23);
    }
}
