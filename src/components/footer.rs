use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a footer of key hints
    ///
    /// Hints are separated by `" | "` and written as `"Label: Keys"`.
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        let footer = Paragraph::new(Line::from(hint_spans(text)))
            .block(Block::default().borders(Borders::TOP))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
        Ok(2)
    }
}

fn hint_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();

    for (i, part) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        if let Some((label, keys)) = part.split_once(": ") {
            spans.push(Span::styled(
                format!("{}: ", label),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                keys,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(part));
        }
    }

    spans
}
