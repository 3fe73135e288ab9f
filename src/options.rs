//! Search options configuration.
//!
//! This module provides the [`SearchOptions`] struct for configuring
//! executable discovery, version probing, and version ordering.

use crate::ComparePolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Flags tried, in order, when asking an executable for its version.
pub const DEFAULT_VERSION_FLAGS: &[&str] = &["--version", "-version", "-V", "version"];

/// Configuration options for finding the latest command.
///
/// # Default Behavior
///
/// Each probe gets 2 seconds to exit and may print up to 64 KiB on each of
/// stdout and stderr before capture stops. Up to 8 candidates are probed
/// at once. The search path is read from `PATH`.
///
/// # Example
///
/// ```rust
/// use latest_version::{ComparePolicy, SearchOptions};
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// // Use default options
/// let opts = SearchOptions::default();
///
/// // Search a fixed set of directories with a longer timeout
/// let opts = SearchOptions {
///     timeout: Duration::from_secs(5),
///     search_path: Some(vec![PathBuf::from("/usr/local/bin"), PathBuf::from("/usr/bin")]),
///     ..Default::default()
/// };
///
/// // Ignore build metadata when ordering versions
/// let opts = SearchOptions {
///     compare_policy: ComparePolicy::Semver,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum time a single version probe may run.
    ///
    /// A probe that exceeds this is killed and the candidate is dropped.
    ///
    /// Default: 2 seconds
    pub timeout: Duration,

    /// Flags passed to the executable, one per attempt, until one yields a
    /// version.
    ///
    /// Default: [`DEFAULT_VERSION_FLAGS`]
    pub version_flags: Vec<String>,

    /// Maximum bytes captured from each of stdout and stderr per attempt.
    ///
    /// Default: 64 KiB
    pub max_output_bytes: usize,

    /// How many candidates are probed concurrently. `0` is treated as `1`.
    ///
    /// Default: 8
    pub concurrency: usize,

    /// Ordering applied to version suffixes.
    ///
    /// Default: [`ComparePolicy::PreReleaseOlder`]
    pub compare_policy: ComparePolicy,

    /// Directories to search instead of `PATH`.
    ///
    /// Default: `None` (read `PATH` from the environment)
    pub search_path: Option<Vec<PathBuf>>,
}

impl SearchOptions {
    pub(crate) fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            version_flags: DEFAULT_VERSION_FLAGS.iter().map(|f| f.to_string()).collect(),
            max_output_bytes: 64 * 1024,
            concurrency: 8,
            compare_policy: ComparePolicy::default(),
            search_path: None,
        }
    }
}
