use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::types::{FileNaming, HeaderFile, HeaderGenError, NsPath, Result, ScanResult};

/// Walks the source tree once and builds the [`ScanResult`].
pub struct HeaderScanner {
    root: PathBuf,
    naming: FileNaming,
    excluded: Vec<String>,
}

impl HeaderScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            naming: FileNaming::new("hpp"),
            excluded: Vec::new(),
        }
    }

    pub fn from_config<P: AsRef<Path>>(root: P, config: &Config) -> Self {
        Self::new(root)
            .with_naming(config.naming())
            .with_excluded(config.excluded_directories.clone())
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_excluded(mut self, dirs: Vec<String>) -> Self {
        self.excluded = dirs;
        self
    }

    /// All header paths below the root, in file-name order per directory.
    ///
    /// Symlinked headers count when their target is a file; linked
    /// directories are not descended.
    pub fn header_paths(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            let is_file = match entry.file_type() {
                Some(t) if t.is_symlink() => path.is_file(),
                Some(t) => t.is_file(),
                None => false,
            };
            if !is_file {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(self.naming.extension()) {
                paths.push(path.to_path_buf());
            }
        }

        Ok(paths)
    }

    /// Build the directory map and the global file index.
    ///
    /// Fails with `HeaderGenError::Collision` when two headers produce the
    /// same generated key. Nothing is written by the scan.
    pub fn scan(&self) -> Result<ScanResult> {
        debug!("Scanning source dir {}", self.root.display());

        let aggregate_file = self.naming.aggregate_file();
        let forward_file = self.naming.forward_file();
        let mut result = ScanResult::default();

        for path in self.header_paths()? {
            let relative = path
                .strip_prefix(&self.root)
                .map_err(|e| HeaderGenError::Walk(e.to_string()))?;
            if relative.to_str().is_none() {
                return Err(HeaderGenError::non_utf8_path(&path));
            }
            let directory = NsPath::from_relative(relative.parent().unwrap_or(Path::new("")));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| HeaderGenError::non_utf8_path(&path))?
                .to_string();

            if file_name == aggregate_file {
                debug!("  Skipping \"{}\": {}", aggregate_file, relative.display());
                continue;
            }

            let header = HeaderFile::new(path.clone(), directory.clone(), file_name.clone());

            if self.is_excluded(&directory) {
                debug!("  Skipping excluded: {}", relative.display());
                result.passthrough.push(header);
                continue;
            }

            if !directory.is_root() {
                let files = result.directories.entry(directory.clone()).or_default();
                if file_name != forward_file {
                    files.push(file_name.clone());
                }
                debug!("Adding header \"{}\" from dir \"{}\"", file_name, directory);
            }

            let key = self.naming.generated_key(&directory, &file_name);
            if let Some(existing) = result.index.get(&key) {
                return Err(HeaderGenError::Collision {
                    key,
                    first: existing.path.clone(),
                    second: path,
                });
            }
            result.scan_order.push(key.clone());
            result.index.insert(key, header);
        }

        info!(
            "Scanned {} headers in {} directories ({} excluded)",
            result.header_count(),
            result.directories.len(),
            result.passthrough.len()
        );

        Ok(result)
    }

    fn is_excluded(&self, directory: &NsPath) -> bool {
        directory
            .segments()
            .last()
            .is_some_and(|name| self.excluded.iter().any(|d| d == name))
    }
}
