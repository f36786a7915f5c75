//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the borders, both sides together
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content, `\n` separates paragraphs
    pub message: &'a str,
    /// Shown under the message, e.g. which keys dismiss the dialog
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let screen = frame.area();
    let max_width = config.max_width.min(screen.width);
    let max_line_width = max_width.saturating_sub(PADDING + 2).max(1) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;

    let dialog_area = centered_rect(
        screen,
        content_width + PADDING + 2,
        (2 + wrapped_lines.len() as u16 + hint_lines + 2).max(5),
    );

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));
    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current_line.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Request failed with status 503", 16);
        assert_eq!(lines, vec!["Request failed", "with status 503"]);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        let lines = wrap_text("first\n\nsecond", 40);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_text_long_word_gets_own_line() {
        let lines = wrap_text("see https://lending.example.com/apply/status", 10);
        assert_eq!(lines, vec!["see", "https://lending.example.com/apply/status"]);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(2, 1, 30, 8);
        assert_eq!(centered_rect(area, 60, 20), area);
    }
}
