//! Core library surface for the shopping-list TUI.
//!
//! The item store is usable on its own; the `ui` module hosts it in a terminal
//! and `config`/`logging` cover the ambient setup the binary needs.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{ConfigError, DraftError};
pub use models::{Item, ItemId};
pub use store::{parse_quantity, ItemStore};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
