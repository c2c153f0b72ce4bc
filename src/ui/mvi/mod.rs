//! Model-View-Intent primitives for the terminal UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every piece of mutable UI state is a plain value. The only way to change
//! it is to hand the current value and an intent to a reducer and keep what
//! comes back, so state transitions can be tested without a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
