//! Discovery implementation submodule.
//!
//! This module contains the pieces that touch the outside world, kept
//! separate from selection so each can be tested alone:
//!
//! - `find_executables_in`: search-path scanning with symlink deduplication
//! - `capture_output`: process spawning with a timeout and capped capture
//! - `extract_version`: regex-based version extraction from CLI output

mod extract;
mod probe;
mod scanner;

pub use extract::extract_version;
pub(crate) use probe::capture_output;
pub use scanner::{find_executables, find_executables_in, search_path_from_env};
