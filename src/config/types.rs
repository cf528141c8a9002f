//! Configuration Types
//!
//! Settings read from the project configuration file. Every field has a
//! default so partial files are accepted.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

use crate::constants::config as defaults;
use crate::types::{AggregateScope, FileNaming, HeaderGenError, Result};

/// Default license block, `{year}` is replaced on every run
const DEFAULT_HEADER: &str = "// Copyright (c) {year}\n#pragma once\n\n\n";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// License/header template placed at the top of generated headers
    pub header: String,

    /// Directory base names opted out of aggregation and forwarding
    pub excluded_directories: Vec<String>,

    /// Also write flat redirects directly under the public root
    pub create_global_includes: bool,

    /// Restrict aggregate generation to this subtree (empty = whole tree)
    pub create_all_base_dir: String,

    /// Top-level namespace, also the directory below `src/` and `include/`
    pub namespace_root: String,

    /// Extension of the scanned headers, without the dot
    pub header_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            excluded_directories: Vec::new(),
            create_global_includes: false,
            create_all_base_dir: String::new(),
            namespace_root: defaults::DEFAULT_NAMESPACE_ROOT.to_string(),
            header_extension: defaults::DEFAULT_HEADER_EXTENSION.to_string(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `HeaderGenError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.namespace_root.trim().is_empty() {
            return Err(HeaderGenError::config("namespace_root must not be empty"));
        }

        if self.namespace_root.contains(['/', '\\', ':']) {
            return Err(HeaderGenError::config(format!(
                "namespace_root must be a single identifier, got `{}`",
                self.namespace_root
            )));
        }

        let extension = self.header_extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(HeaderGenError::config("header_extension must not be empty"));
        }

        let base = Path::new(&self.create_all_base_dir);
        if base.is_absolute()
            || base
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::RootDir))
        {
            return Err(HeaderGenError::config(format!(
                "create_all_base_dir must be relative to the source root, got `{}`",
                self.create_all_base_dir
            )));
        }

        Ok(())
    }

    /// Extension without a leading dot
    pub fn extension(&self) -> &str {
        self.header_extension.trim_start_matches('.')
    }

    pub fn naming(&self) -> FileNaming {
        FileNaming::new(self.extension())
    }

    pub fn aggregate_scope(&self) -> AggregateScope {
        AggregateScope::from_setting(&self.create_all_base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.namespace_root, "erbsland");
        assert_eq!(config.extension(), "hpp");
        assert!(config.header.contains("{year}"));
    }

    #[test]
    fn test_validate_rejects_empty_namespace_root() {
        let config = Config {
            namespace_root: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(HeaderGenError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_nested_namespace_root() {
        let config = Config {
            namespace_root: "erbsland::qt".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_escaping_base_dir() {
        let config = Config {
            create_all_base_dir: "../qt".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            create_all_base_dir: "/qt".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_strips_leading_dot() {
        let config = Config {
            header_extension: ".h".to_string(),
            ..Default::default()
        };
        assert_eq!(config.extension(), "h");
        assert!(config.validate().is_ok());
    }
}
