use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::input_block;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};

/// Dropdown-style selector showing the current option between arrows.
pub struct SelectInput<'a> {
    options: &'a [&'a str],
    selected: usize,
    focused: bool,
}

impl<'a> SelectInput<'a> {
    pub fn new(options: &'a [&'a str], selected: usize) -> Self {
        Self {
            options,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Widget for SelectInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let arrow_style = if self.focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let current = self.options.get(self.selected).copied().unwrap_or_default();
        let mut spans = vec![
            Span::styled("‹ ", arrow_style),
            Span::styled(current, Style::default().fg(HEADER_TEXT)),
            Span::styled(" ›", arrow_style),
        ];
        if self.focused {
            spans.push(Span::styled(
                format!("   {}/{}", self.selected + 1, self.options.len()),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        Paragraph::new(Line::from(spans))
            .block(input_block(self.focused, false))
            .render(area, buf);
    }
}

/// Horizontal radio buttons; at most one option selected.
pub struct RadioGroup<'a> {
    options: &'a [&'a str],
    selected: Option<usize>,
    focused: bool,
    invalid: bool,
}

impl<'a> RadioGroup<'a> {
    pub fn new(options: &'a [&'a str], selected: Option<usize>) -> Self {
        Self {
            options,
            selected,
            focused: false,
            invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Widget for RadioGroup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for (index, option) in self.options.iter().enumerate() {
            let checked = self.selected == Some(index);
            let (mark, style) = if checked {
                (
                    "(•) ",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )
            } else {
                ("( ) ", Style::default().fg(HEADER_TEXT))
            };
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{mark}{option}"), style));
        }
        Paragraph::new(Line::from(spans))
            .block(input_block(self.focused, self.invalid))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn radio_marks_selected_option() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        RadioGroup::new(&["Male", "Female", "Other"], Some(1)).render(area, &mut buf);
        let line = row(&buf, 1);
        assert!(line.contains("( ) Male"));
        assert!(line.contains("(•) Female"));
    }

    #[test]
    fn select_shows_current_option() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        SelectInput::new(&["Student", "Retired"], 1).render(area, &mut buf);
        assert!(row(&buf, 1).contains("Retired"));
    }
}
