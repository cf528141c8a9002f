//! includegen - Header Maintenance for C++ Libraries
//!
//! Keeps the generated headers of a `src/<ns>` / `include/<ns>` library
//! layout in sync with the real headers.
//!
//! ## Core Features
//!
//! - **Aggregate Headers**: `all.hpp` per directory including its headers
//! - **Public Include Tree**: `include/<ns>` rebuilt from redirect headers
//! - **Forward Headers**: `fwd.hpp` collected from `// fwd-entry:` tags
//! - **Collision Check**: flattened file names must be unique project-wide
//!
//! ## Quick Start
//!
//! ```ignore
//! use includegen::{ConfigLoader, Project, pipeline};
//!
//! let config = ConfigLoader::load(&project_dir, None)?;
//! let project = Project::locate(&project_dir, &config)?;
//! let summary = pipeline::run(&project, &config, 2024)?;
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: source tree walk and global file index
//! - [`generator`]: aggregate, redirect and forward header writers
//! - [`pipeline`]: stage ordering for one run
//! - [`config`]: Figment-based configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod pipeline;
pub mod project;
pub mod scanner;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{HeaderGenError, Result, ResultExt};

// Model
pub use types::{AggregateScope, FileNaming, HeaderFile, NsPath, ScanResult};

pub use project::Project;

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use generator::{AggregateGenerator, ForwardGenerator, PublicIncludeRebuilder};
pub use pipeline::RunSummary;
pub use scanner::HeaderScanner;
