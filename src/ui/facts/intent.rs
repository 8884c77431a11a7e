use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactIntent {
    /// Fact list installed at session mount. Rewinds to the first fact.
    Load { fact_count: usize },
    /// One period of the fact timer elapsed.
    Tick,
}

impl Intent for FactIntent {}
