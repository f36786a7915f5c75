//! Field rendering for the wizard form

use crate::state::{FieldError, FieldKind, FieldName, FieldValue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the bordered input box
const INPUT_HEIGHT: u16 = 3;

/// Rows needed to draw a field and its inline errors
pub fn field_height(errors: &[FieldError]) -> u16 {
    INPUT_HEIGHT + errors.len() as u16
}

/// Draw one field: a bordered input followed by its error lines
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    name: FieldName,
    value: &FieldValue,
    errors: &[FieldError],
    is_active: bool,
) {
    let has_errors = !errors.is_empty();
    let border_style = match (is_active, has_errors) {
        (true, _) => Style::default().fg(Color::Cyan),
        (false, true) => Style::default().fg(Color::Red),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let input_area = Rect {
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };
    let block = Block::default()
        .title(format!(" {} ", name.label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(input_line(name, value, is_active)).block(block),
        input_area,
    );

    let error_lines: Vec<Line> = errors
        .iter()
        .map(|err| {
            Line::from(Span::styled(
                format!("  {} {err}", name.label()),
                Style::default().fg(Color::Red),
            ))
        })
        .collect();
    if !error_lines.is_empty() && area.height > INPUT_HEIGHT {
        let error_area = Rect {
            y: area.y + INPUT_HEIGHT,
            height: area.height - INPUT_HEIGHT,
            ..area
        };
        frame.render_widget(Paragraph::new(error_lines), error_area);
    }
}

/// The text inside the input box
fn input_line(name: FieldName, value: &FieldValue, is_active: bool) -> Line<'static> {
    let kind = name.kind();
    let shown = value.display_value(kind);
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let hint_style = Style::default().fg(Color::DarkGray);

    match kind {
        FieldKind::Text => {
            let mut spans = if shown.is_empty() {
                match name.placeholder() {
                    Some(p) if !is_active => vec![Span::styled(p, hint_style)],
                    _ => vec![],
                }
            } else {
                vec![Span::styled(shown, text_style)]
            };
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
        FieldKind::Checkbox => {
            let mut spans = vec![Span::styled(shown, text_style)];
            if is_active {
                spans.push(Span::styled("  Space to toggle", hint_style));
            }
            Line::from(spans)
        }
        FieldKind::Choice(_) | FieldKind::UsState | FieldKind::Generation => {
            let shown = if shown.is_empty() {
                Span::styled("Select...", hint_style)
            } else {
                Span::styled(shown, text_style)
            };
            if is_active {
                let arrow = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                Line::from(vec![
                    Span::styled("◀ ", arrow),
                    shown,
                    Span::styled(" ▶", arrow),
                ])
            } else {
                Line::from(shown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_field_height_grows_with_errors() {
        assert_eq!(field_height(&[]), 3);
        assert_eq!(
            field_height(&[FieldError::Required, FieldError::InvalidDate]),
            5
        );
    }

    #[test]
    fn test_placeholder_only_when_inactive() {
        let empty = FieldValue::Text(String::new());
        assert_eq!(
            line_text(&input_line(FieldName::DateOfBirth, &empty, false)),
            "YYYY-MM-DD"
        );
        assert_eq!(
            line_text(&input_line(FieldName::DateOfBirth, &empty, true)),
            "▌"
        );
    }

    #[test]
    fn test_choice_shows_label_with_arrows() {
        let value = FieldValue::Text("customer.gender.female".to_string());
        assert_eq!(
            line_text(&input_line(FieldName::Gender, &value, true)),
            "◀ Female ▶"
        );
    }

    #[test]
    fn test_unset_choice_prompts() {
        let value = FieldValue::Text(String::new());
        assert_eq!(
            line_text(&input_line(FieldName::State, &value, false)),
            "Select..."
        );
    }

    #[test]
    fn test_checkbox_marker() {
        assert_eq!(
            line_text(&input_line(FieldName::TermsAccepted, &FieldValue::Flag(true), false)),
            "[x]"
        );
    }
}
