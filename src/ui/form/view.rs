//! Draws the form screen: fields, submit button and status banner.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::form::{FieldId, FieldKind, Gender, Occupation};
use crate::ui::form::state::{FocusTarget, FormState, SubmitStatus};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::{FieldInput, FormField, RadioGroup, SelectInput, TextInput};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const OCCUPATION_OPTIONS: [&str; 4] = ["Student", "Professional", "Retired", "Other"];
const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Widest the form column gets on large terminals.
const MAX_FORM_WIDTH: u16 = 72;
/// Submit button row plus banner row.
const FOOTER_ROWS: u16 = 3;

pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState, animation_tick: u8) {
    let area = centered_column(area, MAX_FORM_WIDTH);
    if area.height == 0 || area.width == 0 {
        return;
    }

    let fields: Vec<(FieldId, FormField)> = FieldId::ALL
        .into_iter()
        .map(|field| (field, build_field(state, field)))
        .collect();
    let heights: Vec<u16> = fields.iter().map(|(_, f)| f.height()).collect();

    let fields_height = area.height.saturating_sub(FOOTER_ROWS);
    let focus_index = match state.focus {
        FocusTarget::Field(field) => FieldId::ALL.iter().position(|f| *f == field),
        FocusTarget::SubmitButton => None,
    };
    // With the button focused, show the last fields.
    let anchor = focus_index.unwrap_or(heights.len().saturating_sub(1));
    let first = first_visible(&heights, anchor, fields_height);

    let mut y = area.y;
    let bottom = area.y + fields_height;
    for (index, (_, field)) in fields.into_iter().enumerate().skip(first) {
        let height = heights[index];
        if y + height > bottom {
            break;
        }
        frame.render_widget(
            field,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            },
        );
        y += height;
    }

    let button_area = Rect {
        x: area.x,
        y: bottom.saturating_add(1).min(area.y + area.height.saturating_sub(2)),
        width: area.width,
        height: 1,
    };
    frame.render_widget(submit_button(state, animation_tick), button_area);

    if let Some(banner) = state.banner() {
        let color = match state.status {
            SubmitStatus::Success => STATUS_OK,
            _ => STATUS_ERROR,
        };
        let banner_area = Rect {
            y: button_area.y + 1,
            ..button_area
        };
        if banner_area.y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(banner, Style::default().fg(color)))),
                banner_area,
            );
        }
    }
}

fn build_field(state: &FormState, field: FieldId) -> FormField<'_> {
    let focused = state.is_focused(field);
    let invalid = state.errors.contains(field);
    let input = match field.kind() {
        FieldKind::Text | FieldKind::TextArea => FieldInput::Text(
            TextInput::new(display_str(state, field))
                .placeholder(field.placeholder())
                .focused(focused)
                .invalid(invalid)
                .multiline(field.kind() == FieldKind::TextArea),
        ),
        FieldKind::Select => {
            let selected = Occupation::ALL
                .iter()
                .position(|o| *o == state.submission.occupation)
                .unwrap_or(0);
            FieldInput::Select(SelectInput::new(&OCCUPATION_OPTIONS, selected).focused(focused))
        }
        FieldKind::Radio => {
            let selected = state
                .submission
                .gender
                .and_then(|g| Gender::ALL.iter().position(|o| *o == g));
            FieldInput::Radio(
                RadioGroup::new(&GENDER_OPTIONS, selected)
                    .focused(focused)
                    .invalid(invalid),
            )
        }
    };
    FormField::new(field.label(), input)
        .focused(focused)
        .error(state.errors.get(field).map(|e| e.to_string()))
}

/// Borrowed text for a text-kind field.
fn display_str(state: &FormState, field: FieldId) -> &str {
    match field {
        FieldId::FullName => &state.submission.full_name,
        FieldId::Email => &state.submission.email,
        FieldId::Phone => &state.submission.phone,
        FieldId::Address => &state.submission.address,
        FieldId::DateOfBirth => &state.dob_input,
        FieldId::Feedback => &state.submission.feedback,
        FieldId::Occupation | FieldId::Gender => "",
    }
}

fn submit_button(state: &FormState, animation_tick: u8) -> Paragraph<'static> {
    let focused = state.focus == FocusTarget::SubmitButton;
    let label = if state.in_flight {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        format!(" {spinner} Submitting... ")
    } else {
        " Submit Form ".to_string()
    };
    let style = if state.in_flight {
        Style::default().fg(MUTED_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    };
    Paragraph::new(Line::from(Span::styled(label, style)))
}

/// Index of the first field to draw so that field `anchor` fits in
/// `available` rows.
fn first_visible(heights: &[u16], anchor: usize, available: u16) -> usize {
    let mut first = 0;
    let total = |from: usize| -> u16 {
        heights
            .iter()
            .take(anchor + 1)
            .skip(from)
            .fold(0u16, |acc, h| acc.saturating_add(*h))
    };
    while first < anchor && total(first) > available {
        first += 1;
    }
    first
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visible_scrolls_to_anchor() {
        let heights = [4, 4, 4, 6];
        assert_eq!(first_visible(&heights, 0, 8), 0);
        assert_eq!(first_visible(&heights, 1, 8), 0);
        assert_eq!(first_visible(&heights, 2, 8), 1);
        assert_eq!(first_visible(&heights, 3, 8), 3);
    }

    #[test]
    fn centered_column_caps_width() {
        let area = Rect::new(0, 0, 100, 10);
        let column = centered_column(area, 72);
        assert_eq!(column.width, 72);
        assert_eq!(column.x, 14);
    }
}
