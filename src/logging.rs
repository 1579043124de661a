//! File-backed tracing setup. The terminal UI owns stdout, so log lines go to
//! a file in the data directory instead.

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global tracing subscriber described by `config`.
///
/// Fails if the log directory or file cannot be created, if the filter does
/// not parse, or if a subscriber has already been installed.
pub fn init(config: &Config) -> Result<()> {
    let file = open_log_file(config)?;
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

/// Create the log directory if needed and open the log file for appending.
pub(crate) fn open_log_file(config: &Config) -> Result<File> {
    fs::create_dir_all(&config.log_dir).context("failed to create log directory")?;
    let path = config.log_path();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

pub(crate) fn build_filter(config: &Config) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter `{}`", config.log_filter))
}
