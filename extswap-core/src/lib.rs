#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod rename;
pub mod snapshot;
pub mod suffix;

pub use config::Config;
pub use error::{ExtswapError, Result};
pub use operations::{convert, gs_to_js, js_to_gs};
pub use output::{ConvertReport, OutputFormat, OutputFormatter, VersionResult};
pub use rename::{apply, is_case_insensitive_fs, plan, PlannedRename};
pub use snapshot::{snapshot, EntryKind, Snapshot, SnapshotEntry};
pub use suffix::{Conversion, Direction, Suffix, SUFFIX_LEN};
