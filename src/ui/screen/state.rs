use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    #[default]
    Form,
    Confirmation,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Self::Confirmation)
    }
}
