//! Output generation for the enriched-rows table.
//!
//! # Submodules
//!
//! - [`csv`]: the primary tabular artifact, fixed header plus one line per
//!   surviving article
//! - [`json`]: optional JSON export of the same rows, enabled by CLI flag
//!
//! Both artifacts are rendered in memory and written once at the end of the
//! run.

pub mod csv;
pub mod json;
