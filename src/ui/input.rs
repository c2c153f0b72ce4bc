use crate::form::FieldKind;
use crate::ui::app::App;
use crate::ui::form::{FocusTarget, FormIntent};
use crate::ui::screen::ScreenState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        ScreenState::Confirmation => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char(' ')
            ) {
                app.back_to_form();
            }
        }
        ScreenState::Form => {
            if let Some(intent) = form_intent(app.form().focus, key) {
                app.dispatch_form(intent);
            }
        }
    }
}

/// Map a key press on the form screen to an intent for the focused target.
pub fn form_intent(focus: FocusTarget, key: KeyEvent) -> Option<FormIntent> {
    if is_ctrl_char(key, 's') {
        return Some(FormIntent::Submit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let kind = focus.field().map(|field| field.kind());
    let is_choice = matches!(kind, Some(FieldKind::Select | FieldKind::Radio));

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => FormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FormIntent::FocusPrev,
        KeyCode::Enter => match focus {
            FocusTarget::SubmitButton => FormIntent::Submit,
            FocusTarget::Field(_) if kind == Some(FieldKind::TextArea) => {
                FormIntent::InsertChar('\n')
            }
            FocusTarget::Field(_) => FormIntent::FocusNext,
        },
        KeyCode::Left if is_choice => FormIntent::Cycle { forward: false },
        KeyCode::Right if is_choice => FormIntent::Cycle { forward: true },
        KeyCode::Char(' ') if is_choice => FormIntent::Cycle { forward: true },
        KeyCode::Char(' ') if focus == FocusTarget::SubmitButton => FormIntent::Submit,
        KeyCode::Char(ch) if focus.field().is_some() && !is_choice => FormIntent::InsertChar(ch),
        KeyCode::Backspace => FormIntent::Backspace,
        _ => return None,
    };
    Some(intent)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
