//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place a state transition happens: `(State, Intent) -> State`.
///
/// Implementations must not perform I/O. Side effects (sending the form,
/// switching screens) are decided by the caller from the returned state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
