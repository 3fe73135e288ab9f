//! # latest-version
//!
//! Find the newest installation of a command across every directory on the
//! search path.
//!
//! Developers often have several copies of the same tool installed. This
//! crate finds all of them, asks each for its version, and picks the
//! highest one.
//!
//! ## Features
//!
//! - `find_executables()` lists every matching executable on `PATH`,
//!   deduplicated by resolved target
//! - `get_version()` probes one executable with common version flags
//!   under a timeout
//! - `find_latest_command()` combines the two and selects the winner
//! - `ParsedVersion` / `VersionComparator` give a total order over
//!   free-form version strings
//! - with the `python` feature, the same three lookups are exported as the
//!   `_latest_version` Python extension module
//!
//! ## Example
//!
//! ```rust,no_run
//! use latest_version::{find_executables, find_latest_command, get_version};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Every python3 on PATH, with its version
//!     for path in find_executables("python3").unwrap_or_default() {
//!         if let Ok(info) = get_version(&path).await {
//!             println!("{}: {}", info.path().display(), info.version());
//!         }
//!     }
//!
//!     // The newest one
//!     match find_latest_command("python3").await {
//!         Ok(info) => println!("latest: {}", info.path().display()),
//!         Err(e) => eprintln!("Error: {e}"),
//!     }
//! }
//! ```

mod compare;
mod discovery;
mod error;
mod info;
mod options;
#[cfg(feature = "python")]
mod python;
mod select;

pub use compare::{compare, ComparePolicy, ParsedVersion, VersionComparator};
pub use discovery::{extract_version, find_executables, find_executables_in, search_path_from_env};
pub use error::{LookupError, ProbeError};
pub use info::ExecutableInfo;
pub use options::{SearchOptions, DEFAULT_VERSION_FLAGS};
pub use select::{
    find_latest_command, find_latest_command_with_options, get_version, get_version_with_options,
    probe_all, select_latest,
};
