//! High-level operations that correspond to CLI commands
//!
//! Kept apart from argument parsing and output formatting so they can be
//! driven directly against any directory.

pub mod convert;

pub use convert::{convert, gs_to_js, js_to_gs};
