use crate::ui::mvi::Reducer;

use super::intent::ViewIntent;
use super::state::ViewState;

pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Re-selecting the active view yields the same state.
            ViewIntent::Select(view) => view,
            ViewIntent::Next => state.next(),
            ViewIntent::Previous => state.previous(),
        }
    }
}
