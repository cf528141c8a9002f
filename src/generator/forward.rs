//! Forward-Declaration Collector
//!
//! Headers export forward declarations for their own namespace with a
//! single-line tag:
//!
//! ```text
//! // fwd-entry: class Value
//! // fwd-entry: using ValuePtr = std::shared_ptr<Value>
//! ```
//!
//! Tags are matched on raw text, there is no C++ parsing involved. All tags of
//! a directory end up in that directory's `fwd.hpp`, in scan order.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::{debug, info};

use crate::constants::forward;
use crate::types::{FileNaming, ForwardEntryGroup, NsPath, Result, ResultExt, ScanResult};

static FWD_ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(forward::TAG_PATTERN).expect("fwd-entry regex is valid"));

/// Extract every tagged declaration from header text
pub fn extract_entries(text: &str) -> Vec<String> {
    FWD_ENTRY_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Read every indexed header and group its tags by owning directory.
///
/// Generated forward headers are skipped; aggregate headers never reach the
/// index.
pub fn collect_entries(scan: &ScanResult, naming: &FileNaming) -> Result<ForwardEntryGroup> {
    debug!("Scanning for fwd entries");
    let forward_file = naming.forward_file();
    let mut groups = ForwardEntryGroup::new();

    for header in scan.indexed_headers() {
        if header.file_name == forward_file {
            continue;
        }

        let bytes = fs::read(&header.path).with_path(&header.path)?;
        let entries = extract_entries(&String::from_utf8_lossy(&bytes));
        if entries.is_empty() {
            continue;
        }

        for entry in &entries {
            debug!("  in dir \"{}\" adding entry: {}", header.directory, entry);
        }
        groups
            .entry(header.directory.clone())
            .or_default()
            .extend(entries);
    }

    Ok(groups)
}

/// Render a forward-declaration header
pub fn render_forward(license: &str, namespace: &str, entries: &[String]) -> String {
    let mut text = license.to_string();
    for include in forward::SUPPORT_INCLUDES {
        text.push_str(&format!("#include {}\n", include));
    }
    text.push_str("\n\n");
    text.push_str(&format!("namespace {} {{\n\n\n", namespace));
    text.push_str(&entries.join(";\n"));
    text.push_str(";\n\n\n");
    text.push_str("}\n\n\n");
    text
}

pub struct ForwardGenerator<'a> {
    source_root: &'a Path,
    naming: &'a FileNaming,
    namespace_root: &'a str,
    license: &'a str,
}

impl<'a> ForwardGenerator<'a> {
    pub fn new(
        source_root: &'a Path,
        naming: &'a FileNaming,
        namespace_root: &'a str,
        license: &'a str,
    ) -> Self {
        Self {
            source_root,
            naming,
            namespace_root,
            license,
        }
    }

    /// Path of the forward header for `dir`
    pub fn forward_path(&self, dir: &NsPath) -> PathBuf {
        dir.to_path(self.source_root)
            .join(self.naming.forward_file())
    }

    /// Write one forward header per directory with at least one entry
    pub fn generate(&self, groups: &ForwardEntryGroup) -> Result<Vec<PathBuf>> {
        debug!("Generating `{}` files", self.naming.forward_file());
        let mut written = Vec::new();

        for (dir, entries) in groups {
            if entries.is_empty() {
                continue;
            }
            let path = self.forward_path(dir);
            let text = render_forward(self.license, &dir.namespace(self.namespace_root), entries);
            debug!("  writing: {}", path.display());
            fs::write(&path, text).with_path(&path)?;
            written.push(path);
        }

        info!("Wrote {} forward-declaration headers", written.len());
        Ok(written)
    }
}
