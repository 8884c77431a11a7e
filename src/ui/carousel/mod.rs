//! Breed image carousel position.
//!
//! Mirrors a non-looping carousel: "previous" is disabled on the first
//! slide and "next" on the last.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::CarouselState;
