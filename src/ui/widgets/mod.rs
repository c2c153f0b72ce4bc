//! Stateless field widgets. They draw what they are given and hold no
//! logic beyond focus and error styling.

mod choice;
mod field;
mod input;

pub use choice::{RadioGroup, SelectInput};
pub use field::{FieldInput, FormField};
pub use input::TextInput;

use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR};

/// Bordered box around an input. Error styling wins over focus.
fn input_block(focused: bool, invalid: bool) -> Block<'static> {
    let color = if invalid {
        STATUS_ERROR
    } else if focused {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}
