//! Text input widget for rendering `TextInput` instances.
//!
//! Handles placeholder text, password masking and cursor placement.

use crate::utils::text_input::TextInput;
use crate::utils::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Mask character for hidden input
const MASK_CHAR: char = '•';

/// A widget for rendering `TextInput` with consistent styling.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show one mask character per typed character (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            MASK_CHAR.to_string().repeat(self.input.char_count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.is_empty() {
            input_placeholder_style()
        } else {
            input_text_style()
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.display_text())
            .block(self.block())
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Extension trait for Frame to render `TextInputWidget` with cursor support.
///
/// The `Widget` trait has no access to the frame, so the cursor is placed
/// here.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor_pos = widget.input.cursor();
        let inner = widget.block().inner(area);

        self.render_widget(widget, area);

        if focused {
            let x = inner.x + cursor_pos.min(inner.width as usize) as u16;
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_builder() {
        let input = TextInput::with_text("test");
        let widget = TextInputWidget::new(&input)
            .title("Password")
            .placeholder("Enter password...")
            .focused(true)
            .masked(true);

        assert!(widget.focused);
        assert!(widget.masked);
        assert_eq!(widget.title, Some("Password"));
        assert_eq!(widget.placeholder, Some("Enter password..."));
    }

    #[test]
    fn test_display_text_empty_with_placeholder() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input)
            .placeholder("Enter password...")
            .masked(true);
        assert_eq!(widget.display_text(), "Enter password...");
    }

    #[test]
    fn test_display_text_masked() {
        let input = TextInput::with_text("contraseña");
        let widget = TextInputWidget::new(&input).masked(true);
        assert_eq!(widget.display_text(), "••••••••••");
    }

    #[test]
    fn test_render_never_leaks_masked_text() {
        let input = TextInput::with_text("hunter2");
        let widget = TextInputWidget::new(&input).masked(true);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("•••••••"));
    }
}
