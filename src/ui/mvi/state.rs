//! Marker trait for UI state.

/// A self-contained, cloneable snapshot with everything a view needs to
/// draw. `Default` is the initial state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
