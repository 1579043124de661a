//! Runtime configuration. There is no config file: the only knobs are where
//! the log goes and how chatty it is, both read from the environment.

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ConfigError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".shopping-list";
/// Log file written inside the data directory.
const LOG_FILE_NAME: &str = "shopping-list.log";
/// Filter applied when `SHOPPING_LIST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,shopping_list=debug";

/// Overrides the directory that holds the log file.
pub const LOG_DIR_VAR: &str = "SHOPPING_LIST_LOG_DIR";
/// `tracing_subscriber::EnvFilter` directive for the log file.
pub const LOG_FILTER_VAR: &str = "SHOPPING_LIST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(
            |key| env::var(key).ok(),
            || BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        )
    }

    /// Resolve configuration from an arbitrary variable lookup and home
    /// directory provider. Blank values count as unset.
    pub fn from_lookup<F, H>(lookup: F, home_dir: H) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        H: FnOnce() -> Option<PathBuf>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_dir = match non_blank(LOG_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir()
                .map(|home| home.join(DATA_DIR_NAME))
                .ok_or(ConfigError::MissingHomeDirectory)?,
        };

        let log_filter = non_blank(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            log_dir,
            log_filter,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
