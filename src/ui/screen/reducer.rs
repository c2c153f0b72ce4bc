use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ScreenState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::ShowConfirmation => ScreenState::Confirmation,
            ScreenIntent::BackToForm => ScreenState::Form,
        }
    }
}
