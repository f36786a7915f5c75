//! Layout components (progress header, status bar)

use crate::app::App;
use crate::state::{Step, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Header height in rows
const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// "Step N of 4"
pub fn progress_label(step: Step) -> String {
    format!("Step {} of {}", step.number(), Step::COUNT)
}

/// Fraction of the wizard reached, counting the current step
pub fn progress_ratio(step: Step) -> f64 {
    f64::from(step.number()) / f64::from(Step::COUNT)
}

/// Draw the progress gauge with the step title
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.current_step();
    let (title, ratio) = match app.state.current_view {
        View::Wizard => (
            format!(" Loan application: {} ", step.title()),
            progress_ratio(step),
        ),
        View::Submitted => (" Loan application: done ".to_string(), 1.0),
    };

    let label = match app.state.current_view {
        View::Wizard => progress_label(step),
        View::Submitted => "Submitted".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        let color = if app.is_submitting() {
            Color::Yellow
        } else {
            Color::White
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn view_hints(app: &App) -> &'static str {
    if app.state.has_error() {
        return "Enter/Esc:dismiss";
    }
    match app.state.current_view {
        View::Submitted => "Enter:new application  q:quit",
        View::Wizard if app.state.current_step().is_last() => {
            "Tab:next field  ←/→:choose  Space:toggle  ^P:back  ^S:submit"
        }
        View::Wizard => "Tab:next field  ←/→:choose  ^P:back  ^N:next",
    }
}
