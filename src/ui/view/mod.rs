//! Active tab: which of the three content panels is on screen.
//!
//! # Architecture
//!
//! - `state.rs` - closed set of views (Breeds, Care, Facts)
//! - `intent.rs` - user selection (direct or cycling)
//! - `reducer.rs` - total transition function

mod intent;
mod reducer;
mod state;

pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::ViewState;
