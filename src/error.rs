//! Typed errors surfaced by the library. Terminal plumbing keeps using
//! `anyhow`; these are the cases the UI wants to match on or show verbatim.

use thiserror::Error;

/// Reasons an item draft cannot be written back to the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Item name is required.")]
    NameRequired,
    #[error("Quantity is required.")]
    QuantityRequired,
}

/// Failures while resolving runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `SHOPPING_LIST_LOG_DIR` override and no home directory to fall back
    /// on.
    #[error("unable to locate a home directory for the log file; set SHOPPING_LIST_LOG_DIR")]
    MissingHomeDirectory,
}
