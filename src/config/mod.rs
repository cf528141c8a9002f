//! Configuration Management
//!
//! Configuration is resolved once at startup:
//! 1. Built-in defaults
//! 2. Project config (includegen.toml)
//! 3. Environment variables (INCLUDEGEN_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
