//! Like counter: a monotonically increasing tally for one session.

mod intent;
mod reducer;
mod state;

pub use intent::LikeIntent;
pub use reducer::LikeReducer;
pub use state::LikeCount;
