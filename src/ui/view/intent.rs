use crate::ui::mvi::Intent;

use super::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewIntent {
    /// Tab chosen directly (number key).
    Select(ViewState),
    /// Tab key: move right, wrapping to the first tab.
    Next,
    /// Shift+Tab: move left, wrapping to the last tab.
    Previous,
}

impl Intent for ViewIntent {}
