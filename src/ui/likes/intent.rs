use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIntent {
    Increment,
}

impl Intent for LikeIntent {}
