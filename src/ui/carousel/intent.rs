use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Slides installed at session mount.
    Load { len: usize },
    Next,
    Previous,
}

impl Intent for CarouselIntent {}
