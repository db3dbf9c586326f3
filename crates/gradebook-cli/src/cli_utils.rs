//! Common CLI utility functions shared across commands.

use gradebook_core::{Config, JsonStore};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Load the config file, falling back to defaults when it is missing or
/// invalid, then apply the `--data-file` override.
pub fn load_config(path: &Path, data_file: Option<PathBuf>) -> Config {
    let mut config = if path.exists() {
        match Config::load(path) {
            Ok(c) => {
                info!("Loaded config from {:?}", path);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        warn!("Config file {:?} not found, using defaults", path);
        Config::default()
    };

    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    config
}

pub fn open_store(config: &Config) -> JsonStore {
    JsonStore::new(&config.data_file, config.default_admin.clone())
}
