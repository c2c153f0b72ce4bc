use crate::ui::screen::ScreenState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const FORM_HINTS: &str =
    " Tab/↑↓: Move │ ←→/Space: Choose │ Enter: Next/Submit │ Ctrl+S: Submit │ Ctrl+Q: Quit";
const CONFIRMATION_HINTS: &str = " Enter: Back to form │ Ctrl+Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(screen: ScreenState) -> &'static str {
        match screen {
            ScreenState::Form => FORM_HINTS,
            ScreenState::Confirmation => CONFIRMATION_HINTS,
        }
    }

    pub fn widget(&self, area: Rect, screen: ScreenState) -> Paragraph<'static> {
        let hints = Self::hints(screen);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes: the hints contain arrows.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_screen() {
        assert!(Footer::hints(ScreenState::Form).contains("Submit"));
        assert!(Footer::hints(ScreenState::Confirmation).contains("Back to form"));
    }
}
