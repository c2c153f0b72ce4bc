use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::input_block;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};

const CURSOR: &str = "▏";

/// Single- or multi-line text input.
pub struct TextInput<'a> {
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    invalid: bool,
    multiline: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            focused: false,
            invalid: false,
            multiline: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Rows needed, borders included.
    pub fn height(&self) -> u16 {
        if self.multiline {
            5
        } else {
            3
        }
    }

    fn text(&self, inner_width: usize) -> Text<'a> {
        let value_style = Style::default().fg(HEADER_TEXT);
        let cursor = || Span::styled(CURSOR, Style::default().fg(ACCENT));

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(cursor());
            }
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ));
            return Text::from(Line::from(spans));
        }

        if self.multiline {
            let mut lines: Vec<Line> = self
                .value
                .split('\n')
                .map(|line| Line::from(Span::styled(line, value_style)))
                .collect();
            if self.focused {
                if let Some(last) = lines.last_mut() {
                    last.push_span(cursor());
                }
            }
            return Text::from(lines);
        }

        // Single line: keep the end of the value (where typing happens) visible.
        let reserve = usize::from(self.focused);
        let available = inner_width.saturating_sub(reserve);
        let visible = tail_chars(self.value, available);
        let mut spans = vec![Span::styled(visible, value_style)];
        if self.focused {
            spans.push(cursor());
        }
        Text::from(Line::from(spans))
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = input_block(self.focused, self.invalid);
        let inner_width = block.inner(area).width as usize;
        let text = self.text(inner_width);
        let mut paragraph = Paragraph::new(text).block(block);
        if self.multiline {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(area, buf);
    }
}

/// The last `max` characters of `value`.
fn tail_chars(value: &str, max: usize) -> &str {
    let count = value.chars().count();
    if count <= max {
        return value;
    }
    let skip = count - max;
    match value.char_indices().nth(skip) {
        Some((index, _)) => &value[index..],
        None => "",
    }
}
