use ratatui::prelude::*;

/// Get the border style for a focused pane
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Get the border style for an unfocused pane
pub fn unfocused_border_style() -> Style {
    Style::default()
}

/// Get the text style for placeholder text
pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Get the text style for normal input text
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Highlight style for the selected row of a list
pub fn list_highlight_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for error messages shown inline
pub fn error_text_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for secondary information (emails, timestamps)
pub fn muted_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
