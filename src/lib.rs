//! Purrfect Cat World: a terminal page of cat breeds, care tips and
//! rotating fun facts, with a like counter.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod rotator;
pub mod session;
pub mod shutdown;
pub mod ui;
