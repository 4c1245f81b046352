//! Field rendering utilities for forms

use crate::state::{FieldGroup, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Columns between the left edge of a field's area and its first option
pub const CHOICE_TEXT_INSET: u16 = 1;
/// Spaces between two options of a choice field
pub const CHOICE_GAP: u16 = 3;

const ERROR_COLOR: Color = Color::Red;

fn border_style(is_active: bool, highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(ERROR_COLOR)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split a field's row into its box and the error lines below it
fn split_errors(area: Rect, errors: usize) -> (Rect, Rect) {
    let error_height = (errors as u16).min(area.height);
    let box_area = Rect {
        height: area.height - error_height,
        ..area
    };
    let error_area = Rect {
        y: area.y + box_area.height,
        height: error_height,
        ..area
    };
    (box_area, error_area)
}

fn draw_errors(frame: &mut Frame, area: Rect, group: Option<&FieldGroup>) {
    let Some(group) = group else {
        return;
    };
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = group
        .errors
        .iter()
        .map(|e| Line::from(Span::styled(format!(" {e}"), Style::default().fg(ERROR_COLOR))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw a text field with its error messages underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    group: Option<&FieldGroup>,
) {
    let highlighted = group.is_some_and(|g| g.highlighted);
    let (box_area, error_area) = split_errors(area, group.map_or(0, |g| g.errors.len()));

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let (display_str, style) = if display_value.is_empty() && !is_active {
        ("(empty)".to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (display_value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, highlighted));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);
    draw_errors(frame, error_area, group);
}

/// Draw a choice field as a row of radio options.
///
/// A highlighted group tints every option marker, not just the selected one.
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    group: Option<&FieldGroup>,
) {
    let highlighted = group.is_some_and(|g| g.highlighted);
    let (box_area, error_area) = split_errors(area, group.map_or(0, |g| g.errors.len()));
    let selected = field.selected();

    let marker_style = if highlighted {
        Style::default().fg(ERROR_COLOR)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = Vec::new();
    for (index, option) in field.options.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" ".repeat(CHOICE_GAP as usize)));
        }
        let is_selected = selected == Some(index);
        let marker = if is_selected { "(•) " } else { "( ) " };
        let label_style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(marker, marker_style));
        spans.push(Span::styled(option.as_str(), label_style));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, highlighted));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), box_area);
    draw_errors(frame, error_area, group);
}

/// Which option of a choice field sits at `offset` columns from the
/// field's left edge
pub fn choice_option_at(field: &FormField, offset: u16) -> Option<usize> {
    let mut x = CHOICE_TEXT_INSET;
    for (index, option) in field.options.iter().enumerate() {
        let width = 4 + option.chars().count() as u16; // "(•) " + label
        if offset >= x && offset < x + width {
            return Some(index);
        }
        x += width + CHOICE_GAP;
    }
    None
}
