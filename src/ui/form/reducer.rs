use crate::form::{parse_date, validate, FieldId, FieldKind, Gender, Occupation};
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FocusTarget, FormState, SubmitStatus};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Edit { field, value } => edit(state, field, value),
            FormIntent::InsertChar(ch) => match state.focus.field() {
                Some(field) if accepts_text(field) => {
                    let mut value = state.display_value(field).into_owned();
                    value.push(ch);
                    edit(state, field, value)
                }
                _ => state,
            },
            FormIntent::Backspace => match state.focus.field() {
                Some(field) if accepts_text(field) => {
                    let mut value = state.display_value(field).into_owned();
                    value.pop();
                    edit(state, field, value)
                }
                _ => state,
            },
            FormIntent::Cycle { forward } => match state.focus.field() {
                Some(FieldId::Occupation) => {
                    let mut state = state;
                    state.submission.occupation = state.submission.occupation.cycle(forward);
                    state
                }
                Some(FieldId::Gender) => {
                    let mut state = state;
                    state.submission.gender = Some(Gender::cycle(state.submission.gender, forward));
                    state
                }
                _ => state,
            },
            FormIntent::FocusNext => {
                let target = state.focus.next();
                move_focus(state, target)
            }
            FormIntent::FocusPrev => {
                let target = state.focus.prev();
                move_focus(state, target)
            }
            FormIntent::Focus(target) => move_focus(state, target),
            FormIntent::Submit => {
                if state.in_flight {
                    return state;
                }
                let errors = validate(&state.submission);
                if errors.is_empty() {
                    FormState {
                        errors,
                        in_flight: true,
                        ..state
                    }
                } else {
                    FormState {
                        errors,
                        status: SubmitStatus::Error,
                        ..state
                    }
                }
            }
            FormIntent::SubmissionSettled { delivered } => {
                if !state.in_flight {
                    // Stale outcome: nothing was waiting for it.
                    return state;
                }
                if delivered {
                    FormState {
                        status: SubmitStatus::Success,
                        ..FormState::default()
                    }
                } else {
                    FormState {
                        status: SubmitStatus::Error,
                        in_flight: false,
                        ..state
                    }
                }
            }
            FormIntent::Reset => FormState::default(),
        }
    }
}

fn accepts_text(field: FieldId) -> bool {
    field.is_textual() || field == FieldId::DateOfBirth
}

fn edit(mut state: FormState, field: FieldId, value: String) -> FormState {
    match field {
        FieldId::DateOfBirth => {
            state.submission.date_of_birth = parse_date(&value);
            state.dob_input = value;
        }
        FieldId::Occupation => {
            if let Ok(occupation) = value.parse::<Occupation>() {
                state.submission.occupation = occupation;
            }
        }
        FieldId::Gender => {
            if value.trim().is_empty() {
                state.submission.gender = None;
            } else if let Ok(gender) = value.parse::<Gender>() {
                state.submission.gender = Some(gender);
            }
        }
        text => {
            if let Some(slot) = state.submission.text_mut(text) {
                // Single-line inputs drop newlines the way a browser does.
                *slot = if text.kind() == FieldKind::Text {
                    value.replace(['\n', '\r'], "")
                } else {
                    value
                };
            }
        }
    }
    state
}

/// Change focus. Leaving a field while errors are on screen re-runs
/// validation so fixed fields lose their message before the next submit.
fn move_focus(mut state: FormState, target: FocusTarget) -> FormState {
    if state.focus != target && !state.errors.is_empty() {
        state.errors = validate(&state.submission);
    }
    state.focus = target;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldError;

    fn focused(field: FieldId) -> FormState {
        FormState {
            focus: FocusTarget::Field(field),
            ..FormState::default()
        }
    }

    #[test]
    fn typing_appends_to_focused_field() {
        let state = FormReducer::reduce(focused(FieldId::Email), FormIntent::InsertChar('a'));
        let state = FormReducer::reduce(state, FormIntent::InsertChar('@'));
        assert_eq!(state.submission.email, "a@");
    }

    #[test]
    fn typing_into_radio_is_ignored() {
        let state = FormReducer::reduce(focused(FieldId::Gender), FormIntent::InsertChar('M'));
        assert!(state.submission.gender.is_none());
    }

    #[test]
    fn date_draft_sets_date_only_when_complete() {
        let mut state = focused(FieldId::DateOfBirth);
        for ch in "1990-01-1".chars() {
            state = FormReducer::reduce(state, FormIntent::InsertChar(ch));
        }
        assert!(state.submission.date_of_birth.is_none());
        state = FormReducer::reduce(state, FormIntent::InsertChar('5'));
        assert_eq!(state.dob_input, "1990-01-15");
        assert!(state.submission.date_of_birth.is_some());
        state = FormReducer::reduce(state, FormIntent::Backspace);
        assert!(state.submission.date_of_birth.is_none());
    }

    #[test]
    fn single_line_fields_strip_newlines() {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::Edit {
                field: FieldId::FullName,
                value: "Ada\nLovelace".to_string(),
            },
        );
        assert_eq!(state.submission.full_name, "AdaLovelace");
    }

    #[test]
    fn textarea_keeps_newlines() {
        let state = FormReducer::reduce(focused(FieldId::Feedback), FormIntent::InsertChar('\n'));
        assert_eq!(state.submission.feedback, "\n");
    }

    #[test]
    fn unknown_occupation_is_ignored() {
        let state = FormReducer::reduce(
            FormState::default(),
            FormIntent::Edit {
                field: FieldId::Occupation,
                value: "Pirate".to_string(),
            },
        );
        assert_eq!(state.submission.occupation, Occupation::Student);
    }

    #[test]
    fn blur_revalidates_only_when_errors_are_shown() {
        let state = FormReducer::reduce(FormState::default(), FormIntent::FocusNext);
        assert!(state.errors.is_empty());

        let state = FormReducer::reduce(state, FormIntent::Submit);
        assert_eq!(state.errors.get(FieldId::FullName), Some(FieldError::FullNameRequired));

        let state = FormReducer::reduce(
            state,
            FormIntent::Edit {
                field: FieldId::FullName,
                value: "Ada".to_string(),
            },
        );
        // Still shown until focus moves.
        assert!(state.errors.contains(FieldId::FullName));
        let state = FormReducer::reduce(state, FormIntent::FocusNext);
        assert!(!state.errors.contains(FieldId::FullName));
        assert!(state.errors.contains(FieldId::Email));
    }
}
