//! Search-path scanning for candidate executables.

use crate::LookupError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Read the search path from the `PATH` environment variable.
///
/// Returns an empty list when `PATH` is unset.
pub fn search_path_from_env() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Find every executable named `command` on `PATH`.
///
/// See [`find_executables_in`] for the scanning rules.
///
/// # Example
///
/// ```rust,no_run
/// use latest_version::find_executables;
///
/// for path in find_executables("python3").unwrap_or_default() {
///     println!("{}", path.display());
/// }
/// ```
pub fn find_executables(command: &str) -> Result<Vec<PathBuf>, LookupError> {
    find_executables_in(command, &search_path_from_env())
}

/// Find every executable named `command` in the given directories.
///
/// Directories are scanned in order. Missing or unreadable directories and
/// empty entries are skipped; relative entries are resolved against the
/// current directory. Within a directory the `which` crate applies the
/// platform rules: the execute bit on Unix, `PATHEXT` suffixes on Windows.
///
/// Paths that resolve to the same file (through symlinks or a repeated
/// directory) are reported once, at their first position.
///
/// # Errors
///
/// - [`LookupError::InvalidCommand`] if `command` is empty or contains a
///   path separator
/// - [`LookupError::NotFound`] if no directory holds a matching executable
pub fn find_executables_in(command: &str, dirs: &[PathBuf]) -> Result<Vec<PathBuf>, LookupError> {
    validate_command(command)?;

    let cwd = std::env::current_dir().ok();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for entry in dirs {
        let Some(dir) = absolute_dir(entry, cwd.as_deref()) else {
            trace!(entry = %entry.display(), "skipping search path entry");
            continue;
        };
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "search path entry is not a directory");
            continue;
        }

        let matches = match which::which_in_all(command, Some(dir.as_os_str()), &dir) {
            Ok(matches) => matches,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "failed to scan directory");
                continue;
            }
        };

        for path in matches {
            let resolved = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if seen.insert(resolved) {
                trace!(path = %path.display(), "found candidate");
                found.push(path);
            } else {
                trace!(path = %path.display(), "duplicate of an earlier candidate");
            }
        }
    }

    if found.is_empty() {
        return Err(LookupError::NotFound {
            command: command.to_string(),
        });
    }

    debug!(command, count = found.len(), "candidates found");
    Ok(found)
}

fn validate_command(command: &str) -> Result<(), LookupError> {
    if command.is_empty() || command.contains(['/', std::path::MAIN_SEPARATOR]) {
        return Err(LookupError::InvalidCommand {
            command: command.to_string(),
        });
    }
    Ok(())
}

/// Resolve a search path entry to an absolute directory.
///
/// Empty entries yield `None`; relative ones need a current directory.
fn absolute_dir(entry: &Path, cwd: Option<&Path>) -> Option<PathBuf> {
    if entry.as_os_str().is_empty() {
        None
    } else if entry.is_absolute() {
        Some(entry.to_path_buf())
    } else {
        cwd.map(|cwd| cwd.join(entry))
    }
}
