use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenIntent {
    /// A submission went out; show the thank-you view.
    ShowConfirmation,
    /// The single action on the confirmation view.
    BackToForm,
}

impl Intent for ScreenIntent {}
