//! In-memory model built from one scan of the source tree.
//!
//! The scan produces a [`ScanResult`] once; every later stage only borrows it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::constants::{naming, reserved};

// =============================================================================
// Namespace Path
// =============================================================================

/// Directory relative to the source root, one segment per namespace level.
///
/// `qt/toml` is the directory of namespace `erbsland::qt::toml`. The empty
/// path is the source root itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NsPath(Vec<String>);

impl NsPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build from a relative filesystem path, ignoring `.` and root components
    pub fn from_relative(path: &Path) -> Self {
        Self(
            path.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Parse a `/`-separated path such as `qt/toml`
    pub fn parse(text: &str) -> Self {
        Self(
            text.split('/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn as_posix(&self) -> String {
        self.0.join("/")
    }

    /// Segments joined into a single file-name fragment (`qt_toml`)
    pub fn flattened(&self) -> String {
        self.0.join(naming::SEGMENT_JOINER)
    }

    /// C++ namespace for this directory below `root` (`erbsland::qt::toml`)
    pub fn namespace(&self, root: &str) -> String {
        std::iter::once(root)
            .chain(self.0.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(naming::NAMESPACE_SEPARATOR)
    }

    /// True if `self` equals `base` or lies below it
    pub fn is_within(&self, base: &NsPath) -> bool {
        self.0.starts_with(&base.0)
    }

    pub fn strip_prefix(&self, base: &NsPath) -> Option<NsPath> {
        self.0.strip_prefix(base.0.as_slice()).map(|s| Self(s.to_vec()))
    }

    /// Filesystem location of this directory below `base`
    pub fn to_path(&self, base: &Path) -> PathBuf {
        self.0.iter().fold(base.to_path_buf(), |p, s| p.join(s))
    }

    /// `/`-separated path of `file_name` inside this directory
    pub fn file_posix(&self, file_name: &str) -> String {
        if self.is_root() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.as_posix(), file_name)
        }
    }
}

impl fmt::Display for NsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.as_posix())
        }
    }
}

// =============================================================================
// File Naming
// =============================================================================

/// Reserved and generated file names for one header extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    extension: String,
}

impl FileNaming {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `all.hpp`
    pub fn aggregate_file(&self) -> String {
        format!("{}.{}", reserved::AGGREGATE_STEM, self.extension)
    }

    /// `fwd.hpp`
    pub fn forward_file(&self) -> String {
        format!("{}.{}", reserved::FORWARD_STEM, self.extension)
    }

    /// Generated key of a header: its own name, except for forward headers
    /// below the root which key by their directory (`fwd_qt_toml.hpp`).
    pub fn generated_key(&self, directory: &NsPath, file_name: &str) -> String {
        if file_name == self.forward_file() && !directory.is_root() {
            format!(
                "{}{}.{}",
                naming::FORWARD_PREFIX,
                directory.flattened(),
                self.extension
            )
        } else {
            file_name.to_string()
        }
    }

    /// Flattened aggregate redirect name for `directory` (`all_qt_toml.hpp`)
    pub fn flattened_aggregate(&self, directory: &NsPath) -> String {
        if directory.is_root() {
            self.aggregate_file()
        } else {
            format!(
                "{}{}.{}",
                naming::AGGREGATE_PREFIX,
                directory.flattened(),
                self.extension
            )
        }
    }
}

// =============================================================================
// Header File
// =============================================================================

/// One real header on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFile {
    /// Absolute (or project-anchored) path
    pub path: PathBuf,
    /// Owning directory relative to the source root
    pub directory: NsPath,
    /// Base filename
    pub file_name: String,
}

impl HeaderFile {
    pub fn new(path: PathBuf, directory: NsPath, file_name: impl Into<String>) -> Self {
        Self {
            path,
            directory,
            file_name: file_name.into(),
        }
    }

    /// Path relative to the source root, `/`-separated
    pub fn relative_posix(&self) -> String {
        self.directory.file_posix(&self.file_name)
    }
}

// =============================================================================
// Scan Result
// =============================================================================

/// Directory → ordinary header names directly inside it
pub type DirectoryMap = BTreeMap<NsPath, Vec<String>>;

/// Generated key → real header
pub type GlobalFileIndex = BTreeMap<String, HeaderFile>;

/// Directory → raw declarations in scan order
pub type ForwardEntryGroup = BTreeMap<NsPath, Vec<String>>;

/// Immutable result of the header scan, shared by every later stage
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Directories eligible for aggregate headers
    pub directories: DirectoryMap,
    /// Every non-excluded header by generated key
    pub index: GlobalFileIndex,
    /// Headers in excluded directories; redirected at their mirrored path only
    pub passthrough: Vec<HeaderFile>,
    /// Index keys in filesystem traversal order
    pub scan_order: Vec<String>,
}

impl ScanResult {
    /// Directories with at least one header that fall into `scope`
    pub fn aggregate_dirs<'a>(
        &'a self,
        scope: &'a AggregateScope,
    ) -> impl Iterator<Item = (&'a NsPath, &'a Vec<String>)> + 'a {
        self.directories
            .iter()
            .filter(move |(dir, files)| !files.is_empty() && scope.contains(dir))
    }

    /// Indexed headers in the order the scan discovered them
    pub fn indexed_headers(&self) -> impl Iterator<Item = &HeaderFile> {
        self.scan_order.iter().filter_map(|key| self.index.get(key))
    }

    pub fn header_count(&self) -> usize {
        self.index.len() + self.passthrough.len()
    }
}

// =============================================================================
// Aggregate Scope
// =============================================================================

/// Restricts aggregate generation to one subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateScope {
    base: Option<NsPath>,
}

impl AggregateScope {
    /// Whole tree
    pub fn all() -> Self {
        Self { base: None }
    }

    /// Only `base` and the directories below it
    pub fn below(base: NsPath) -> Self {
        if base.is_root() {
            Self::all()
        } else {
            Self { base: Some(base) }
        }
    }

    /// Build from the `create_all_base_dir` setting; empty means whole tree
    pub fn from_setting(setting: &str) -> Self {
        Self::below(NsPath::parse(setting))
    }

    pub fn base(&self) -> Option<&NsPath> {
        self.base.as_ref()
    }

    pub fn contains(&self, dir: &NsPath) -> bool {
        match &self.base {
            Some(base) => dir.is_within(base),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ns_path_from_relative() {
        let path = NsPath::from_relative(Path::new("qt/toml"));
        assert_eq!(path.segments(), ["qt", "toml"]);
        assert_eq!(path.as_posix(), "qt/toml");
        assert_eq!(path.flattened(), "qt_toml");
        assert!(NsPath::from_relative(Path::new("")).is_root());
    }

    #[test]
    fn test_ns_path_namespace() {
        assert_eq!(
            NsPath::parse("net/http").namespace("erbsland"),
            "erbsland::net::http"
        );
        assert_eq!(NsPath::root().namespace("erbsland"), "erbsland");
    }

    #[test]
    fn test_ns_path_parse_ignores_stray_separators() {
        assert_eq!(NsPath::parse("/qt//toml/"), NsPath::parse("qt/toml"));
        assert!(NsPath::parse("").is_root());
    }

    #[test]
    fn test_ns_path_is_within_matches_whole_segments() {
        let base = NsPath::parse("qt");
        assert!(NsPath::parse("qt").is_within(&base));
        assert!(NsPath::parse("qt/toml").is_within(&base));
        assert!(!NsPath::parse("qtx/toml").is_within(&base));
        assert!(NsPath::parse("anything").is_within(&NsPath::root()));
    }

    #[test]
    fn test_ns_path_strip_prefix() {
        let dir = NsPath::parse("qt/toml/impl");
        assert_eq!(
            dir.strip_prefix(&NsPath::parse("qt")),
            Some(NsPath::parse("toml/impl"))
        );
        assert_eq!(dir.strip_prefix(&NsPath::parse("net")), None);
    }

    #[test]
    fn test_file_naming() {
        let naming = FileNaming::new("hpp");
        assert_eq!(naming.aggregate_file(), "all.hpp");
        assert_eq!(naming.forward_file(), "fwd.hpp");
        assert_eq!(
            naming.flattened_aggregate(&NsPath::parse("qt/toml")),
            "all_qt_toml.hpp"
        );
        assert_eq!(naming.flattened_aggregate(&NsPath::root()), "all.hpp");
    }

    #[test]
    fn test_generated_key() {
        let naming = FileNaming::new("hpp");
        let dir = NsPath::parse("qt/toml");
        assert_eq!(naming.generated_key(&dir, "Value.hpp"), "Value.hpp");
        assert_eq!(naming.generated_key(&dir, "fwd.hpp"), "fwd_qt_toml.hpp");
        assert_eq!(naming.generated_key(&NsPath::root(), "fwd.hpp"), "fwd.hpp");
        assert_eq!(FileNaming::new("h").generated_key(&dir, "fwd.h"), "fwd_qt_toml.h");
    }

    #[test]
    fn test_header_file_relative_posix() {
        let header = HeaderFile::new(
            PathBuf::from("/p/src/erbsland/qt/toml/Value.hpp"),
            NsPath::parse("qt/toml"),
            "Value.hpp",
        );
        assert_eq!(header.relative_posix(), "qt/toml/Value.hpp");

        let top = HeaderFile::new(
            PathBuf::from("/p/src/erbsland/Top.hpp"),
            NsPath::root(),
            "Top.hpp",
        );
        assert_eq!(top.relative_posix(), "Top.hpp");
    }

    #[test]
    fn test_aggregate_scope() {
        let all = AggregateScope::from_setting("");
        assert!(all.contains(&NsPath::parse("qt/toml")));
        assert!(all.base().is_none());

        let scoped = AggregateScope::from_setting("qt");
        assert!(scoped.contains(&NsPath::parse("qt")));
        assert!(scoped.contains(&NsPath::parse("qt/toml")));
        assert!(!scoped.contains(&NsPath::parse("net")));
    }

    #[test]
    fn test_aggregate_dirs_skips_empty_and_out_of_scope() {
        let mut scan = ScanResult::default();
        scan.directories
            .insert(NsPath::parse("qt/toml"), vec!["Value.hpp".to_string()]);
        scan.directories.insert(NsPath::parse("qt/empty"), vec![]);
        scan.directories
            .insert(NsPath::parse("net"), vec!["Socket.hpp".to_string()]);

        let scope = AggregateScope::from_setting("qt");
        let dirs: Vec<_> = scan.aggregate_dirs(&scope).map(|(d, _)| d.as_posix()).collect();
        assert_eq!(dirs, vec!["qt/toml"]);
    }
}
