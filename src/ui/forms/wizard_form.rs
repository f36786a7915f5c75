//! Wizard form rendering: the current step's fields and the navigation row

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Navigation row height (top border + label + bottom border)
const NAV_HEIGHT: u16 = 3;

/// How a navigation button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    Enabled,
    Disabled,
    /// Pressed and waiting on the server
    Busy,
}

/// Draw the fields of the current step with the Previous/Next buttons below
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let step = form.current_step();

    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(NAV_HEIGHT)])
        .horizontal_margin(1)
        .split(inner);

    let fields = app.state.screen_fields();
    if fields.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing to fill in on this step.")
                .style(Style::default().fg(Color::DarkGray)),
            chunks[0],
        );
    } else {
        let heights: Vec<u16> = fields
            .iter()
            .map(|name| field_height(form.field_errors(*name)))
            .collect();
        let visible = visible_range(&heights, app.state.active_field, chunks[0].height);

        let bottom = chunks[0].bottom();
        let mut y = chunks[0].y;
        for index in visible {
            let name = fields[index];
            let field_area = Rect {
                x: chunks[0].x,
                y,
                width: chunks[0].width,
                height: heights[index].min(bottom.saturating_sub(y)),
            };
            draw_field(
                frame,
                field_area,
                name,
                form.value(name),
                form.field_errors(name),
                index == app.state.active_field,
            );
            y += heights[index];
        }
    }

    draw_navigation(frame, chunks[1], app);
}

fn draw_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.current_step();
    let submitting = app.is_submitting();

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Min(0),
            Constraint::Length(22),
        ])
        .split(area);

    let back = if step.prev().is_some() {
        NavState::Enabled
    } else {
        NavState::Disabled
    };
    draw_nav_button(frame, buttons[0], Some("^P"), "Previous", back);

    let (key, label) = if step.is_last() {
        ("^S", "Submit")
    } else {
        ("^N", "Next")
    };
    if submitting {
        draw_nav_button(frame, buttons[2], None, "Submitting...", NavState::Busy);
    } else {
        draw_nav_button(frame, buttons[2], Some(key), label, NavState::Enabled);
    }
}

fn draw_nav_button(frame: &mut Frame, area: Rect, key: Option<&str>, label: &str, state: NavState) {
    let (border, text) = match state {
        NavState::Enabled => (
            Color::Cyan,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        NavState::Disabled => (Color::DarkGray, Style::default().fg(Color::DarkGray)),
        NavState::Busy => (
            Color::Yellow,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ),
    };

    let mut spans = Vec::new();
    if let Some(key) = key {
        spans.push(Span::styled(key, Style::default().fg(border)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(label, text));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// Which fields fit in `available` rows, keeping the active one on screen.
///
/// Fields are taken from the top when everything up to the active field
/// fits; otherwise the window ends at the active field.
pub fn visible_range(heights: &[u16], active: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let active = active.min(heights.len() - 1);

    let mut start = active;
    let mut used = heights[active];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    let mut end = active + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_range(&[3, 3, 3], 2, 20), 0..3);
    }

    #[test]
    fn test_window_follows_active_field() {
        let heights = [3; 8];
        assert_eq!(visible_range(&heights, 0, 9), 0..3);
        assert_eq!(visible_range(&heights, 6, 9), 4..7);
    }

    #[test]
    fn test_error_lines_take_room() {
        assert_eq!(visible_range(&[4, 4, 3, 3], 0, 10), 0..2);
    }

    #[test]
    fn test_no_fields() {
        assert_eq!(visible_range(&[], 0, 10), 0..0);
    }

    #[test]
    fn test_active_out_of_range_is_clamped() {
        assert_eq!(visible_range(&[3, 3], 5, 3), 1..2);
    }
}
