//! Aggregate Header Generator
//!
//! Writes one `all.hpp` per in-scope directory including every ordinary
//! header of that directory, sorted by name.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::types::{AggregateScope, FileNaming, Result, ResultExt, ScanResult};

/// Render an aggregate header; `files` are sorted before output
pub fn render_aggregate(license: &str, files: &[String]) -> String {
    let mut sorted: Vec<&String> = files.iter().collect();
    sorted.sort();

    let mut text = license.to_string();
    for file in sorted {
        text.push_str(&format!("#include \"{}\"\n", file));
    }
    text.push_str("\n\n");
    text
}

pub struct AggregateGenerator<'a> {
    source_root: &'a Path,
    naming: &'a FileNaming,
    license: &'a str,
}

impl<'a> AggregateGenerator<'a> {
    pub fn new(source_root: &'a Path, naming: &'a FileNaming, license: &'a str) -> Self {
        Self {
            source_root,
            naming,
            license,
        }
    }

    /// Write the aggregate header of every in-scope directory.
    ///
    /// Existing files are overwritten unconditionally.
    pub fn generate(&self, scan: &ScanResult, scope: &AggregateScope) -> Result<Vec<PathBuf>> {
        let aggregate_file = self.naming.aggregate_file();
        let mut written = Vec::new();

        for (dir, files) in scan.aggregate_dirs(scope) {
            let path = dir.to_path(self.source_root).join(&aggregate_file);
            debug!("- writing: {}", dir.file_posix(&aggregate_file));
            fs::write(&path, render_aggregate(self.license, files)).with_path(&path)?;
            written.push(path);
        }

        info!("Wrote {} aggregate headers", written.len());
        Ok(written)
    }
}
