use crate::ui::mvi::Reducer;

use super::intent::LikeIntent;
use super::state::LikeCount;

pub struct LikeReducer;

impl Reducer for LikeReducer {
    type State = LikeCount;
    type Intent = LikeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LikeIntent::Increment => state.incremented(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(LikeCount::default().get(), 0);
    }

    #[test]
    fn each_increment_adds_one() {
        let mut count = LikeCount::default();
        for expected in 1..=10 {
            count = LikeReducer::reduce(count, LikeIntent::Increment);
            assert_eq!(count.get(), expected);
        }
    }
}
