use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::app_dirs;

/// Build a [`Config`] instance by combining default locations, an optional
/// explicit file, and environment variables.
pub(super) fn build_config(explicit: Option<&Path>) -> Result<Config> {
    let mut builder = Config::builder();

    for path in default_config_files() {
        builder = builder.add_source(File::from(path).required(false));
    }

    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("discovery_search")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".discovery-search.toml"));
        files.push(current_dir.join("discovery-search.toml"));
    }

    files
}
