//! Base trait for UI state.

/// Marker trait for state owned by one controller.
///
/// `Default` is the value at session mount; `PartialEq` lets tests and the
/// render loop compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
