//! Confirmation shown once the application was accepted

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Application submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you, your application was received.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(submitted) = &app.state.submitted {
        lines.push(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::raw(submitted.display_id.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::raw(submitted.status.to_string()),
        ]));
        if let Some(message) = &submitted.message {
            lines.push(Line::from(""));
            lines.push(Line::from(message.clone()));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: start a new application   q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
