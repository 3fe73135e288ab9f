//! The result record for a successfully probed executable.

use crate::ParsedVersion;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// An executable together with the version it reported.
///
/// The record is immutable once built. The parsed form of the version is
/// computed on construction so selection never re-parses.
///
/// # Example
///
/// ```rust
/// use latest_version::ExecutableInfo;
///
/// let info = ExecutableInfo::new("/usr/bin/python3", "3.11.4");
/// assert_eq!(info.version(), "3.11.4");
/// assert_eq!(info.parsed().segments(), &[3, 11, 4]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ExecutableInfo {
    path: PathBuf,
    version: String,
    #[serde(skip)]
    parsed: ParsedVersion,
}

impl ExecutableInfo {
    /// Build a record from a path and its extracted version string.
    pub fn new(path: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        let version = version.into();
        Self {
            path: path.into(),
            parsed: ParsedVersion::parse(&version),
            version,
        }
    }

    /// Path to the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version string extracted from the executable's output.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Comparable form of [`version`](Self::version).
    pub fn parsed(&self) -> &ParsedVersion {
        &self.parsed
    }

    /// Consume the record, returning the path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
