//! Global Constants
//!
//! Centralized names, tags and layout constants.
//! Every fixed string that shows up in generated files is defined here.

/// Reserved file stems inside the source tree, combined with the header extension
pub mod reserved {
    /// Aggregate header written into every in-scope directory (`all.hpp`)
    pub const AGGREGATE_STEM: &str = "all";

    /// Forward-declaration header written into every directory with tags (`fwd.hpp`)
    pub const FORWARD_STEM: &str = "fwd";
}

/// Naming rules for generated keys and flattened paths
pub mod naming {
    /// Prefix of flattened aggregate redirects (`all_qt_toml.hpp`)
    pub const AGGREGATE_PREFIX: &str = "all_";

    /// Prefix of directory-derived forward keys (`fwd_qt_toml.hpp`)
    pub const FORWARD_PREFIX: &str = "fwd_";

    /// Joiner replacing directory separators in flattened names
    pub const SEGMENT_JOINER: &str = "_";

    /// C++ namespace scope token
    pub const NAMESPACE_SEPARATOR: &str = "::";
}

/// Forward-declaration extraction and output
pub mod forward {
    /// Tag marking one forward-declarable entity per line; never spans lines
    pub const TAG_PATTERN: &str = r"//[ \t]*fwd-entry:[ \t]*(.+)";

    /// Language support includes emitted at the top of every forward header
    pub const SUPPORT_INCLUDES: &[&str] = &["<cstdint>", "<type_traits>"];
}

/// Project layout
pub mod layout {
    /// Directory below the project root holding the real sources
    pub const SOURCE_DIR: &str = "src";

    /// Directory below the project root holding the public redirects
    pub const INCLUDE_DIR: &str = "include";

    /// Placeholder in the license template replaced by the current year
    pub const YEAR_PLACEHOLDER: &str = "{year}";
}

/// Configuration defaults
pub mod config {
    /// Project-relative configuration file
    pub const CONFIG_FILE: &str = "includegen.toml";

    /// Prefix for environment overrides (`INCLUDEGEN_CREATE_GLOBAL_INCLUDES=true`)
    pub const ENV_PREFIX: &str = "INCLUDEGEN_";

    /// Top-level namespace and directory below `src/` and `include/`
    pub const DEFAULT_NAMESPACE_ROOT: &str = "erbsland";

    /// Extension of the headers that are scanned
    pub const DEFAULT_HEADER_EXTENSION: &str = "hpp";
}
