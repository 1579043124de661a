//! Binary entry point: resolve configuration, start file logging, and drive
//! the Ratatui event loop over an empty in-memory list until the user exits.
use shopping_list::{logging, run_app, App, Config, ItemStore};
use tracing::info;

/// Returning a `Result` bubbles fatal setup problems (an unwritable log
/// directory, a terminal that refuses raw mode) up to the shell.
fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;
    info!(log = %config.log_path().display(), "starting shopping list");

    let mut app = App::new(ItemStore::new());
    let result = run_app(&mut app);
    info!(items = app.store().len(), "shopping list closed");
    result
}
