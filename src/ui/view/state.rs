use std::fmt;

use crate::ui::mvi::UiState;

/// The three mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Breeds,
    Care,
    Facts,
}

impl UiState for ViewState {}

impl ViewState {
    /// Display order of the tab bar.
    pub const ALL: [ViewState; 3] = [ViewState::Breeds, ViewState::Care, ViewState::Facts];

    pub fn index(self) -> usize {
        match self {
            ViewState::Breeds => 0,
            ViewState::Care => 1,
            ViewState::Facts => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewState::Breeds => "breeds",
            ViewState::Care => "care",
            ViewState::Facts => "facts",
        }
    }

    /// Label on the tab bar.
    pub fn tab_label(self) -> &'static str {
        match self {
            ViewState::Breeds => "Cat Breeds",
            ViewState::Care => "Cat Care",
            ViewState::Facts => "Fun Facts",
        }
    }

    /// Heading at the top of the panel body.
    pub fn heading(self) -> &'static str {
        match self {
            ViewState::Breeds => "Popular Cat Breeds",
            ViewState::Care => "Cat Care Tips",
            ViewState::Facts => "Fun Cat Facts",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewState::Breeds => ViewState::Care,
            ViewState::Care => ViewState::Facts,
            ViewState::Facts => ViewState::Breeds,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ViewState::Breeds => ViewState::Facts,
            ViewState::Care => ViewState::Breeds,
            ViewState::Facts => ViewState::Care,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
