//! Error types for executable lookup and version probing.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by the lookup entry points.
///
/// The variants keep "the command does not exist" apart from "the command
/// exists but none of its installations could be versioned", so callers
/// can report the two situations differently.
///
/// # Example
///
/// ```rust
/// use latest_version::{find_executables_in, LookupError};
///
/// match find_executables_in("definitely_not_a_real_command_12345", &[]) {
///     Err(LookupError::NotFound { command }) => {
///         eprintln!("{command} is not installed");
///     }
///     other => println!("{other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No executable with the requested name exists on the search path.
    #[error("command not found: {command}")]
    NotFound {
        /// The command name that was searched for.
        command: String,
    },

    /// Executables were found, but every version probe failed.
    #[error("found {candidates} executable(s) for '{command}' but none reported a version")]
    NoVersionableExecutable {
        /// The command name that was searched for.
        command: String,
        /// How many candidate executables were probed.
        candidates: usize,
    },

    /// The command name is empty or contains a path separator.
    #[error("invalid command name: '{command}'")]
    InvalidCommand {
        /// The rejected command name.
        command: String,
    },
}

/// Reasons a single executable could not yield a version.
///
/// Probe failures are per-candidate. The selector drops the candidate and
/// keeps going; they only reach callers through [`get_version`].
///
/// [`get_version`]: crate::get_version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The process could not be started.
    #[error("failed to execute {}: {message}", .path.display())]
    Spawn {
        /// Executable that failed to start.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },

    /// The executable exists but the current user may not run it.
    #[error("permission denied executing {}", .path.display())]
    PermissionDenied {
        /// Executable that was refused.
        path: PathBuf,
    },

    /// The process did not exit within the configured timeout.
    #[error("{} did not exit within {timeout:?}", .path.display())]
    Timeout {
        /// Executable that hung.
        path: PathBuf,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// Every version flag produced empty output.
    #[error("{} printed nothing for any version flag", .path.display())]
    NoOutput {
        /// Executable that stayed silent.
        path: PathBuf,
    },

    /// Output was produced but contained no recognizable version.
    #[error("no version found in output of {}", .path.display())]
    VersionNotFound {
        /// Executable whose output could not be parsed.
        path: PathBuf,
    },
}

impl ProbeError {
    /// Short human-readable description of the failure kind.
    ///
    /// ```rust
    /// use latest_version::ProbeError;
    /// use std::path::PathBuf;
    ///
    /// let error = ProbeError::NoOutput { path: PathBuf::from("/usr/bin/tool") };
    /// assert_eq!(error.description(), "No output from version flags");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "Failed to execute",
            Self::PermissionDenied { .. } => "Permission denied",
            Self::Timeout { .. } => "Version probe timed out",
            Self::NoOutput { .. } => "No output from version flags",
            Self::VersionNotFound { .. } => "Failed to parse version",
        }
    }

    /// The executable the failure refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Spawn { path, .. }
            | Self::PermissionDenied { path }
            | Self::Timeout { path, .. }
            | Self::NoOutput { path }
            | Self::VersionNotFound { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        let err = LookupError::NotFound {
            command: "python3".to_string(),
        };
        assert_eq!(err.to_string(), "command not found: python3");

        let err = LookupError::NoVersionableExecutable {
            command: "python3".to_string(),
            candidates: 2,
        };
        assert_eq!(
            err.to_string(),
            "found 2 executable(s) for 'python3' but none reported a version"
        );

        let err = LookupError::InvalidCommand {
            command: "bin/tool".to_string(),
        };
        assert_eq!(err.to_string(), "invalid command name: 'bin/tool'");
    }

    #[test]
    fn test_probe_error_descriptions() {
        let path = PathBuf::from("/usr/bin/tool");
        assert_eq!(
            ProbeError::Timeout {
                path: path.clone(),
                timeout: Duration::from_secs(2)
            }
            .description(),
            "Version probe timed out"
        );
        assert_eq!(
            ProbeError::PermissionDenied { path: path.clone() }.description(),
            "Permission denied"
        );
        assert_eq!(
            ProbeError::VersionNotFound { path }.description(),
            "Failed to parse version"
        );
    }

    #[test]
    fn test_probe_error_path_and_display() {
        let err = ProbeError::Spawn {
            path: PathBuf::from("/opt/tool"),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(err.path(), std::path::Path::new("/opt/tool"));
        assert_eq!(
            err.to_string(),
            "failed to execute /opt/tool: No such file or directory"
        );
    }

    #[test]
    fn test_probe_error_equality() {
        let a = ProbeError::NoOutput {
            path: PathBuf::from("/a"),
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            ProbeError::NoOutput {
                path: PathBuf::from("/b")
            }
        );
    }
}
