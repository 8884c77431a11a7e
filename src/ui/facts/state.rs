use crate::ui::mvi::UiState;

/// Index of the fact currently on display.
///
/// `current_index < fact_count` whenever `fact_count > 0`. A state with
/// `fact_count == 0` never moves off index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotatorState {
    current_index: usize,
    fact_count: usize,
}

impl UiState for RotatorState {}

impl RotatorState {
    pub fn new(fact_count: usize) -> Self {
        Self {
            current_index: 0,
            fact_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn fact_count(&self) -> usize {
        self.fact_count
    }

    pub(super) fn advanced(self) -> Self {
        if self.fact_count == 0 {
            return self;
        }
        Self {
            current_index: (self.current_index + 1) % self.fact_count,
            fact_count: self.fact_count,
        }
    }
}
