//! Marker trait for intents.

/// Something that happened: a key press, an edit, or the outcome of the
/// outbound request. Intents carry data; they never carry behavior.
pub trait Intent: Send + 'static {}
