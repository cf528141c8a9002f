//! Header Generators
//!
//! - [`aggregate`]: `all.hpp` per directory
//! - [`redirect`]: public include tree of redirect headers
//! - [`forward`]: `fwd.hpp` from tagged declarations
//! - [`template`]: license block with year substitution

pub mod aggregate;
pub mod forward;
pub mod redirect;
pub mod template;

pub use aggregate::{AggregateGenerator, render_aggregate};
pub use forward::{ForwardGenerator, collect_entries, extract_entries, render_forward};
pub use redirect::{PublicIncludeRebuilder, RedirectWriter, redirect_include, up_count};
pub use template::{HeaderTemplate, current_year};
