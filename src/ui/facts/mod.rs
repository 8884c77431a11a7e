//! Position of the fact rotator within the fact list.
//!
//! The periodic task that produces ticks lives in [`crate::rotator`]; this
//! module only owns the index and its wrap-around rule.

mod intent;
mod reducer;
mod state;

pub use intent::FactIntent;
pub use reducer::FactReducer;
pub use state::RotatorState;
