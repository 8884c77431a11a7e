//! Base trait for intents.

/// Marker trait for something that can change UI state.
///
/// Intents come from two places only: key presses forwarded by the input
/// layer, and ticks delivered by the fact timer.
pub trait Intent: Send + 'static {}
