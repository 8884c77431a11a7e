//! Periodic fact rotation task.
//!
//! [`FactTimer`] is owned by the session: starting it spawns one task on the
//! current tokio runtime, and stopping or dropping the handle cancels that
//! task. The task never touches UI state; it only enqueues
//! [`AppEvent::FactTick`](crate::ui::events::AppEvent::FactTick) on the same
//! queue as key presses.

mod error;
mod timer;

pub use error::RotatorError;
pub use timer::{FactTimer, DEFAULT_FACT_INTERVAL};
