use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeCount(u64);

impl UiState for LikeCount {}

impl LikeCount {
    pub fn get(self) -> u64 {
        self.0
    }

    pub(super) fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
