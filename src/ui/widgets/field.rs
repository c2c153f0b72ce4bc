use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::{RadioGroup, SelectInput, TextInput};
use crate::ui::theme::{ACCENT, HEADER_TEXT, STATUS_ERROR};

/// Any of the input widgets a [`FormField`] can wrap.
pub enum FieldInput<'a> {
    Text(TextInput<'a>),
    Select(SelectInput<'a>),
    Radio(RadioGroup<'a>),
}

impl FieldInput<'_> {
    pub fn height(&self) -> u16 {
        match self {
            FieldInput::Text(input) => input.height(),
            FieldInput::Select(input) => input.height(),
            FieldInput::Radio(input) => input.height(),
        }
    }
}

impl Widget for FieldInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            FieldInput::Text(input) => input.render(area, buf),
            FieldInput::Select(input) => input.render(area, buf),
            FieldInput::Radio(input) => input.render(area, buf),
        }
    }
}

/// Label above, input in the middle, inline error below (only when set).
pub struct FormField<'a> {
    label: &'a str,
    input: FieldInput<'a>,
    error: Option<String>,
    focused: bool,
}

impl<'a> FormField<'a> {
    pub fn new(label: &'a str, input: FieldInput<'a>) -> Self {
        Self {
            label,
            input,
            error: None,
            focused: false,
        }
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn height(&self) -> u16 {
        1 + self.input.height() + u16::from(self.error.is_some())
    }
}

impl Widget for FormField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let label_style = if self.focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let label_area = Rect { height: 1, ..area };
        Paragraph::new(Line::from(Span::styled(self.label, label_style))).render(label_area, buf);

        let input_height = self.input.height().min(area.height.saturating_sub(1));
        let input_area = Rect {
            y: area.y + 1,
            height: input_height,
            ..area
        };
        self.input.render(input_area, buf);

        if let Some(error) = self.error {
            let error_y = input_area.y + input_area.height;
            if error_y < area.y + area.height {
                let error_area = Rect {
                    y: error_y,
                    height: 1,
                    ..area
                };
                Paragraph::new(Line::from(Span::styled(
                    error,
                    Style::default().fg(STATUS_ERROR),
                )))
                .render(error_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_counts_error_line() {
        let field = FormField::new("Email", FieldInput::Text(TextInput::new("")));
        assert_eq!(field.height(), 4);
        let field = field.error(Some("Email is required".to_string()));
        assert_eq!(field.height(), 5);
    }

    #[test]
    fn renders_error_under_input() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        FormField::new("Email", FieldInput::Text(TextInput::new("")))
            .error(Some("Email is required".to_string()))
            .render(area, &mut buf);
        let row: String = (0..30).map(|x| buf[(x, 4)].symbol().to_string()).collect();
        assert!(row.starts_with("Email is required"));
    }
}
