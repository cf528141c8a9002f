//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (`<project>/includegen.toml`, required)
//! 3. Environment variables (INCLUDEGEN_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants::config as defaults;
use crate::types::{HeaderGenError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project: defaults → config file → env vars.
    ///
    /// `explicit` overrides the default config file location. The file must
    /// exist; a missing file is a configuration error.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| Self::project_config_path(project_dir));

        if !path.is_file() {
            return Err(HeaderGenError::config(format!(
                "Could not find configuration: {}",
                path.display()
            )));
        }

        debug!("Loading project config from: {}", path.display());
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed(defaults::ENV_PREFIX));

        Self::extract(figment)
    }

    /// Load configuration from TOML text only (no environment)
    pub fn load_from_str(text: &str) -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(text));

        Self::extract(figment)
    }

    /// Default config file location for a project
    pub fn project_config_path(project_dir: &Path) -> PathBuf {
        project_dir.join(defaults::CONFIG_FILE)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(config: &Config) -> Result<String> {
        toml::to_string_pretty(config).map_err(|e| HeaderGenError::config(e.to_string()))
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| HeaderGenError::config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }
}
