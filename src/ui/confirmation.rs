//! The thank-you view shown after a successful submission.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK};

const DIALOG_WIDTH: u16 = 64;

fn confirmation_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank You!",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "We've received your message and appreciate you taking",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            "the time to reach out. Our team will review your details",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            "and get back to you shortly.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " ← Back to Home ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

pub fn render_confirmation(frame: &mut Frame, area: Rect) {
    let lines = confirmation_lines();
    let height = lines.len().saturating_add(2) as u16;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);

    frame.render_widget(Clear, dialog);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        dialog,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_back_action() {
        let lines = confirmation_lines();
        assert!(lines
            .iter()
            .any(|line| line.to_string().contains("Back to Home")));
    }
}
