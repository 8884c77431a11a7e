//! Model-View-Intent primitives shared by the view controllers.
//!
//! ```text
//! key / timer event ──→ Intent ──→ Reducer ──→ State ──→ draw()
//!        ↑                                                 │
//!        └─────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain value the presentation layer reads
//! - **Intent**: a user action or a timer tick
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
