//! Which top-level view is showing: the form or the confirmation.

mod intent;
mod reducer;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::ScreenState;
