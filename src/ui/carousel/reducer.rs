use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Load { len } => CarouselState::new(len),
            CarouselIntent::Next if state.can_go_next() => state.with_index(state.index() + 1),
            CarouselIntent::Previous if state.can_go_previous() => {
                state.with_index(state.index() - 1)
            }
            CarouselIntent::Next | CarouselIntent::Previous => state,
        }
    }
}
