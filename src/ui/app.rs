use crate::content::{BreedRecord, ContentStore};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use crate::ui::facts::{FactIntent, FactReducer, RotatorState};
use crate::ui::likes::{LikeCount, LikeIntent, LikeReducer};
use crate::ui::mvi::Reducer;
use crate::ui::view::{ViewIntent, ViewReducer, ViewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// All state of one session.
///
/// Each field is owned by exactly one reducer; the methods below are the
/// only entry points that mutate them.
pub struct App {
    should_quit: bool,
    content: ContentStore,
    view: ViewState,
    rotator: RotatorState,
    carousel: CarouselState,
    likes: LikeCount,
}

impl App {
    pub fn new(content: ContentStore) -> Self {
        let mut app = Self {
            should_quit: false,
            view: ViewState::default(),
            rotator: RotatorState::default(),
            carousel: CarouselState::default(),
            likes: LikeCount::default(),
            content,
        };
        let fact_count = app.content.fact_count();
        let slides = app.content.breeds().len();
        dispatch_mvi!(app, rotator, FactReducer, FactIntent::Load { fact_count });
        dispatch_mvi!(app, carousel, CarouselReducer, CarouselIntent::Load { len: slides });
        app
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // View selection
    // ========================================================================

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn dispatch_view(&mut self, intent: ViewIntent) {
        let before = self.view;
        dispatch_mvi!(self, view, ViewReducer, intent);
        if before != self.view {
            tracing::debug!(from = %before, to = %self.view, "View changed");
        }
    }

    pub fn select_view(&mut self, view: ViewState) {
        self.dispatch_view(ViewIntent::Select(view));
    }

    // ========================================================================
    // Fact rotation
    // ========================================================================

    pub fn rotator(&self) -> RotatorState {
        self.rotator
    }

    /// Fact at the rotator's position. `None` only for an empty fact list.
    pub fn current_fact(&self) -> Option<&str> {
        self.content.fact(self.rotator.current_index())
    }

    pub fn on_fact_tick(&mut self) {
        dispatch_mvi!(self, rotator, FactReducer, FactIntent::Tick);
        tracing::trace!(index = self.rotator.current_index(), "Fact advanced");
    }

    // ========================================================================
    // Carousel
    // ========================================================================

    pub fn carousel(&self) -> CarouselState {
        self.carousel
    }

    pub fn current_slide(&self) -> Option<&BreedRecord> {
        self.content.breed(self.carousel.index())
    }

    pub fn dispatch_carousel(&mut self, intent: CarouselIntent) {
        dispatch_mvi!(self, carousel, CarouselReducer, intent);
    }

    // ========================================================================
    // Likes
    // ========================================================================

    pub fn likes(&self) -> LikeCount {
        self.likes
    }

    pub fn like(&mut self) {
        dispatch_mvi!(self, likes, LikeReducer, LikeIntent::Increment);
        tracing::info!(likes = self.likes.get(), "Cats liked");
    }
}
