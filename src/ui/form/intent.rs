use crate::form::FieldId;
use crate::ui::form::state::FocusTarget;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace a field's value. Occupation and gender values are parsed;
    /// an unknown option is ignored, an empty gender clears the selection.
    Edit { field: FieldId, value: String },
    /// Type a character into the focused text field.
    InsertChar(char),
    /// Delete the last character of the focused text field.
    Backspace,
    /// Step the focused select or radio field to the next/previous option.
    Cycle { forward: bool },
    FocusNext,
    FocusPrev,
    Focus(FocusTarget),
    /// Validate, and mark in flight if valid. Ignored while in flight.
    Submit,
    /// The outbound request finished. `delivered` is the adapter's outcome.
    SubmissionSettled { delivered: bool },
    /// Back to a blank form (after the confirmation screen).
    Reset,
}

impl Intent for FormIntent {}
