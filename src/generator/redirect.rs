//! Public Include Rebuilder
//!
//! The public include tree is owned by the tool: it is removed and rebuilt
//! from the scan on every run. Each file in it is a redirect holding a single
//! `#include` that climbs back to the project root and descends into the
//! source tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::project::Project;
use crate::types::{
    AggregateScope, FileNaming, HeaderGenError, NsPath, Result, ResultExt, ScanResult,
};

// =============================================================================
// Path Arithmetic
// =============================================================================

/// Number of `../` steps from a redirect back to the project root.
///
/// `public_root_depth` is the number of directories between the project root
/// and the public root (`include/erbsland` → 2), `redirect_depth` the number of
/// components of the redirect path below the public root, file name included.
pub fn up_count(public_root_depth: usize, redirect_depth: usize) -> usize {
    (public_root_depth + redirect_depth).saturating_sub(1)
}

/// Include text of a redirect at `redirect_rel` pointing at `target_rel`.
///
/// Both paths are `/`-separated; `redirect_rel` is relative to the public
/// root, `target_rel` relative to the source root.
pub fn redirect_include(
    public_root_depth: usize,
    source_prefix: &str,
    redirect_rel: &str,
    target_rel: &str,
) -> String {
    let redirect_depth = redirect_rel.split('/').filter(|s| !s.is_empty()).count();
    format!(
        "{}{}/{}",
        "../".repeat(up_count(public_root_depth, redirect_depth)),
        source_prefix,
        target_rel
    )
}

/// Full file content of a redirect header
pub fn render_redirect(include: &str) -> String {
    format!("#include \"{}\"\n", include)
}

// =============================================================================
// Redirect Writer
// =============================================================================

/// Writes single redirect headers below the public root
pub struct RedirectWriter {
    public_root: PathBuf,
    public_root_depth: usize,
    source_root: PathBuf,
    source_prefix: String,
}

impl RedirectWriter {
    pub fn new(project: &Project) -> Self {
        Self {
            public_root: project.public_root.clone(),
            public_root_depth: project.public_root_depth(),
            source_root: project.source_root.clone(),
            source_prefix: project.source_prefix(),
        }
    }

    /// Write a redirect at `redirect_rel` for the real header `target`.
    ///
    /// Fails with `MissingHeader` if `target` is gone.
    pub fn write(&self, target: &Path, redirect_rel: &str) -> Result<PathBuf> {
        if !target.is_file() {
            return Err(HeaderGenError::missing_header(target));
        }

        let target_rel = target
            .strip_prefix(&self.source_root)
            .map(|p| NsPath::from_relative(p).as_posix())
            .map_err(|_| HeaderGenError::FileAccess {
                path: target.to_path_buf(),
                message: "outside of the source tree".to_string(),
            })?;

        let include = redirect_include(
            self.public_root_depth,
            &self.source_prefix,
            redirect_rel,
            &target_rel,
        );

        let path = NsPath::parse(redirect_rel).to_path(&self.public_root);
        debug!("  writing \"{}\" -> \"{}\"", path.display(), include);

        if let Some(parent) = path.parent()
            && !parent.is_dir()
        {
            fs::create_dir_all(parent).with_path(parent)?;
        }
        fs::write(&path, render_redirect(&include)).with_path(&path)?;

        Ok(path)
    }
}

// =============================================================================
// Rebuilder
// =============================================================================

pub struct PublicIncludeRebuilder<'a> {
    writer: RedirectWriter,
    public_root: PathBuf,
    source_root: PathBuf,
    naming: &'a FileNaming,
    scope: &'a AggregateScope,
    create_global_includes: bool,
}

impl<'a> PublicIncludeRebuilder<'a> {
    pub fn new(project: &Project, naming: &'a FileNaming, scope: &'a AggregateScope) -> Self {
        Self {
            writer: RedirectWriter::new(project),
            public_root: project.public_root.clone(),
            source_root: project.source_root.clone(),
            naming,
            scope,
            create_global_includes: false,
        }
    }

    pub fn with_global_includes(mut self, enabled: bool) -> Self {
        self.create_global_includes = enabled;
        self
    }

    /// Remove the public tree and recreate it empty
    pub fn clear(&self) -> Result<()> {
        if self.public_root.is_dir() {
            fs::remove_dir_all(&self.public_root).with_path(&self.public_root)?;
        }
        fs::create_dir_all(&self.public_root).with_path(&self.public_root)?;
        Ok(())
    }

    /// Public path of the flattened aggregate redirect for `dir`.
    ///
    /// With a scope base `B` the file lives below `B` and is named after the
    /// part of `dir` below `B`; for `dir == B` it coincides with `B/all.hpp`.
    pub fn flattened_aggregate_path(&self, dir: &NsPath) -> String {
        match self.scope.base() {
            Some(base) => {
                let rest = dir.strip_prefix(base).unwrap_or_else(|| dir.clone());
                base.file_posix(&self.naming.flattened_aggregate(&rest))
            }
            None => self.naming.flattened_aggregate(dir),
        }
    }

    /// Clear the public tree and write every redirect. Returns the number of
    /// redirect files written.
    pub fn rebuild(&self, scan: &ScanResult) -> Result<usize> {
        debug!("Writing the individual header files in the `include` directory.");
        self.clear()?;

        let aggregate_file = self.naming.aggregate_file();
        let mut count = 0;

        for (dir, _) in scan.aggregate_dirs(self.scope) {
            let target = dir.to_path(&self.source_root).join(&aggregate_file);
            let flattened = self.flattened_aggregate_path(dir);
            let mirrored = dir.file_posix(&aggregate_file);

            self.writer.write(&target, &flattened)?;
            count += 1;
            if flattened != mirrored {
                self.writer.write(&target, &mirrored)?;
                count += 1;
            }
        }

        for (key, header) in &scan.index {
            let mirrored = header.relative_posix();
            self.writer.write(&header.path, &mirrored)?;
            count += 1;
            if self.create_global_includes && *key != mirrored {
                self.writer.write(&header.path, key)?;
                count += 1;
            }
        }

        for header in &scan.passthrough {
            self.writer.write(&header.path, &header.relative_posix())?;
            count += 1;
        }

        info!("Wrote {} redirect headers", count);
        Ok(count)
    }
}
