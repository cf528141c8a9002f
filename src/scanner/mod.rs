//! Header Scanner
//!
//! Single walk over the source tree producing the directory map and the
//! global file index consumed by every generator stage.

pub mod header_scanner;

pub use header_scanner::HeaderScanner;
