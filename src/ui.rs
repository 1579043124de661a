//! Ratatui front-end: a single list screen with modal dialogs for adding,
//! editing, and deleting items. All list rules live in the store; this layer
//! only turns key presses into store calls and draws the result.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
