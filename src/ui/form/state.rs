use std::borrow::Cow;

use crate::form::{ContactSubmission, FieldId, ValidationErrors};
use crate::ui::mvi::UiState;

/// Banner shown for any failed submit, whether validation or delivery.
pub const ERROR_BANNER: &str = "Please fix the errors and try again.";
pub const SUCCESS_BANNER: &str = "Form submitted successfully!";

/// Result of the most recent submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// What currently has keyboard focus: a field, or the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    SubmitButton,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(FieldId::FullName)
    }
}

impl FocusTarget {
    fn index(self) -> usize {
        match self {
            FocusTarget::Field(field) => FieldId::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or(0),
            FocusTarget::SubmitButton => FieldId::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldId::ALL
            .get(index)
            .copied()
            .map(FocusTarget::Field)
            .unwrap_or(FocusTarget::SubmitButton)
    }

    /// Next target in tab order, wrapping after the submit button.
    pub fn next(self) -> Self {
        let len = FieldId::ALL.len() + 1;
        Self::from_index((self.index() + 1) % len)
    }

    /// Previous target in tab order, wrapping before the first field.
    pub fn prev(self) -> Self {
        let len = FieldId::ALL.len() + 1;
        Self::from_index((self.index() + len - 1) % len)
    }

    pub fn field(self) -> Option<FieldId> {
        match self {
            FocusTarget::Field(field) => Some(field),
            FocusTarget::SubmitButton => None,
        }
    }
}

/// Everything the form screen owns: the record being filled in, its
/// errors, and where the submit cycle stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub submission: ContactSubmission,
    /// Date of birth as typed. `submission.date_of_birth` is set only while
    /// this parses as a date.
    pub dob_input: String,
    pub errors: ValidationErrors,
    pub status: SubmitStatus,
    /// A request is out. Gates the submit control.
    pub in_flight: bool,
    pub focus: FocusTarget,
}

impl UiState for FormState {}

impl FormState {
    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    /// Text shown in the input for `field`.
    pub fn display_value(&self, field: FieldId) -> Cow<'_, str> {
        match field {
            FieldId::DateOfBirth => Cow::Borrowed(&self.dob_input),
            other => self.submission.wire_value(other),
        }
    }

    pub fn is_focused(&self, field: FieldId) -> bool {
        self.focus == FocusTarget::Field(field)
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some(SUCCESS_BANNER),
            SubmitStatus::Error => Some(ERROR_BANNER),
        }
    }
}
