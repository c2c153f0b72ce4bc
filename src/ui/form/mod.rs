//! The contact form screen: state, intents, reducer, container and view.

mod container;
mod intent;
mod reducer;
mod state;
mod view;

pub use container::{FormContainer, FormOutcome};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FocusTarget, FormState, SubmitStatus, ERROR_BANNER, SUCCESS_BANNER};
pub use view::render_form;
