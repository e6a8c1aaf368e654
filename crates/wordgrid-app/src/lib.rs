//! WordGrid Application
//!
//! Command line front end: loads a config, generates a board and replays
//! drag gestures over it.

mod app;
mod cli;

pub use app::{App, AppError, DragOutcome};
pub use cli::{Cli, DragSpec};
