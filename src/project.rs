//! Project Layout
//!
//! Resolves `<project>/src/<ns>` and `<project>/include/<ns>` and checks that
//! the tool can run against them before anything is written.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::layout;
use crate::types::{HeaderGenError, Result};

/// Resolved directories of one project
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root directory
    pub root: PathBuf,
    /// Real headers: `<root>/src/<namespace_root>`
    pub source_root: PathBuf,
    /// Redirect tree: `<root>/include/<namespace_root>`, owned by the tool
    pub public_root: PathBuf,
    /// Top-level namespace
    pub namespace_root: String,
}

impl Project {
    /// Resolve and validate the layout.
    ///
    /// `src/`, `src/<ns>` and `include/` must exist. The inner public
    /// directory is recreated on every run and may be missing.
    pub fn locate(root: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let src_dir = root.join(layout::SOURCE_DIR);
        if !src_dir.is_dir() {
            return Err(HeaderGenError::config(format!(
                "The source dir does not exist: {}",
                src_dir.display()
            )));
        }

        let source_root = src_dir.join(&config.namespace_root);
        if !source_root.is_dir() {
            return Err(HeaderGenError::config(format!(
                "The namespace source dir does not exist: {}",
                source_root.display()
            )));
        }

        let include_dir = root.join(layout::INCLUDE_DIR);
        if !include_dir.is_dir() {
            return Err(HeaderGenError::config(format!(
                "The include dir does not exist: {}",
                include_dir.display()
            )));
        }

        Ok(Self {
            public_root: include_dir.join(&config.namespace_root),
            root,
            source_root,
            namespace_root: config.namespace_root.clone(),
        })
    }

    /// Number of directories between the project root and the public root
    pub fn public_root_depth(&self) -> usize {
        self.public_root
            .strip_prefix(&self.root)
            .map(|p| p.components().count())
            .unwrap_or(2)
    }

    /// `/`-separated path from the project root into the source root
    pub fn source_prefix(&self) -> String {
        format!("{}/{}", layout::SOURCE_DIR, self.namespace_root)
    }
}
