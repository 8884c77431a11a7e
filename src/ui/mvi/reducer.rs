//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The single place a state value changes.
///
/// `reduce` must be pure: same state and intent, same result. Logging and
/// redraw requests belong to the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
