use crate::ui::mvi::Reducer;

use super::intent::FactIntent;
use super::state::RotatorState;

pub struct FactReducer;

impl Reducer for FactReducer {
    type State = RotatorState;
    type Intent = FactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FactIntent::Load { fact_count } => RotatorState::new(fact_count),
            FactIntent::Tick => state.advanced(),
        }
    }
}
