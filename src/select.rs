//! Finding the latest installation of a command.

use crate::discovery::{capture_output, extract_version, find_executables_in, search_path_from_env};
use crate::{ExecutableInfo, LookupError, ProbeError, SearchOptions, VersionComparator};
use futures::stream::{self, StreamExt};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Probe an executable for its version using default options.
///
/// # Example
///
/// ```rust,no_run
/// use latest_version::get_version;
/// use std::path::Path;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match get_version(Path::new("/usr/bin/python3")).await {
///         Ok(info) => println!("{} is {}", info.path().display(), info.version()),
///         Err(e) => eprintln!("{e}"),
///     }
/// }
/// ```
pub async fn get_version(path: &Path) -> Result<ExecutableInfo, ProbeError> {
    get_version_with_options(path, &SearchOptions::default()).await
}

/// Probe an executable for its version.
///
/// # Probe Process
///
/// 1. Run `{path} {flag}` for each of `options.version_flags` in order,
///    each run bounded by `options.timeout`
/// 2. Skip flags that produce no output at all
/// 3. Extract a version from the combined stdout and stderr text
/// 4. Return the first version found
///
/// Exit codes are ignored. A spawn failure or timeout ends the probe
/// at once; the remaining flags are not tried.
///
/// # Errors
///
/// - `Spawn` / `PermissionDenied` if the executable cannot be started
/// - `Timeout` if a run exceeds `options.timeout`
/// - `NoOutput` if every flag produced empty output
/// - `VersionNotFound` if output appeared but held no version
pub async fn get_version_with_options(
    path: &Path,
    options: &SearchOptions,
) -> Result<ExecutableInfo, ProbeError> {
    let mut saw_output = false;

    for flag in &options.version_flags {
        let output =
            capture_output(path, flag, options.timeout, options.max_output_bytes).await?;
        if output.trim().is_empty() {
            trace!(path = %path.display(), flag = %flag, "no output");
            continue;
        }
        saw_output = true;

        if let Some(version) = extract_version(&output) {
            debug!(path = %path.display(), flag = %flag, version = %version, "probed version");
            return Ok(ExecutableInfo::new(path, version));
        }
        trace!(path = %path.display(), flag = %flag, "output held no version");
    }

    let path = path.to_path_buf();
    Err(if saw_output {
        ProbeError::VersionNotFound { path }
    } else {
        ProbeError::NoOutput { path }
    })
}

/// Probe every candidate, returning one result per candidate in input order.
///
/// Up to `options.concurrency` probes run at once. Results keep candidate
/// order regardless of which probe finishes first.
pub async fn probe_all(
    candidates: &[PathBuf],
    options: &SearchOptions,
) -> Vec<Result<ExecutableInfo, ProbeError>> {
    stream::iter(candidates)
        .map(|path| get_version_with_options(path, options))
        .buffered(options.effective_concurrency())
        .collect()
        .await
}

/// Pick the executable with the greatest version.
///
/// Ties go to the earliest item, so with candidates in search-path order
/// the directory listed first wins. Returns `None` for an empty input.
///
/// ```rust
/// use latest_version::{select_latest, ExecutableInfo, VersionComparator};
///
/// let infos = vec![
///     ExecutableInfo::new("/usr/bin/python3", "3.10.0"),
///     ExecutableInfo::new("/usr/local/bin/python3", "3.11.0"),
/// ];
/// let latest = select_latest(infos, &VersionComparator::default()).unwrap();
/// assert_eq!(latest.version(), "3.11.0");
/// ```
pub fn select_latest<I>(infos: I, comparator: &VersionComparator) -> Option<ExecutableInfo>
where
    I: IntoIterator<Item = ExecutableInfo>,
{
    infos.into_iter().fold(None, |best, info| match best {
        Some(best)
            if comparator.compare(info.parsed(), best.parsed()) != Ordering::Greater =>
        {
            Some(best)
        }
        _ => Some(info),
    })
}

/// Find the latest installation of `command` on `PATH` using default options.
///
/// # Example
///
/// ```rust,no_run
/// use latest_version::find_latest_command;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match find_latest_command("python3").await {
///         Ok(info) => println!("{} ({})", info.path().display(), info.version()),
///         Err(e) => eprintln!("Error: {e}"),
///     }
/// }
/// ```
pub async fn find_latest_command(command: &str) -> Result<ExecutableInfo, LookupError> {
    find_latest_command_with_options(command, &SearchOptions::default()).await
}

/// Find the latest installation of `command`.
///
/// # Selection Process
///
/// 1. Scan the search path (`options.search_path`, or `PATH`) for candidates
/// 2. Probe each candidate for its version, dropping any that fail
/// 3. Reduce the survivors to the greatest version under
///    `options.compare_policy`, earliest candidate winning ties
///
/// # Errors
///
/// - [`LookupError::NotFound`] if no candidate exists
/// - [`LookupError::NoVersionableExecutable`] if candidates exist but no
///   probe produced a version
/// - [`LookupError::InvalidCommand`] for an empty or path-like name
pub async fn find_latest_command_with_options(
    command: &str,
    options: &SearchOptions,
) -> Result<ExecutableInfo, LookupError> {
    let candidates = match &options.search_path {
        Some(dirs) => find_executables_in(command, dirs)?,
        None => find_executables_in(command, &search_path_from_env())?,
    };

    let infos = probe_all(&candidates, options)
        .await
        .into_iter()
        .filter_map(|result| match result {
            Ok(info) => Some(info),
            Err(e) => {
                debug!(path = %e.path().display(), error = %e, "dropping candidate");
                None
            }
        });

    let comparator = VersionComparator::new(options.compare_policy);
    let latest = select_latest(infos, &comparator).ok_or_else(|| {
        LookupError::NoVersionableExecutable {
            command: command.to_string(),
            candidates: candidates.len(),
        }
    })?;

    debug!(
        command,
        path = %latest.path().display(),
        version = latest.version(),
        "selected latest"
    );
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComparePolicy;

    fn info(path: &str, version: &str) -> ExecutableInfo {
        ExecutableInfo::new(path, version)
    }

    fn latest(infos: Vec<ExecutableInfo>) -> Option<ExecutableInfo> {
        select_latest(infos, &VersionComparator::default())
    }

    #[test]
    fn test_select_latest_picks_highest() {
        let winner = latest(vec![
            info("/usr/bin/python3", "2.7.18"),
            info("/usr/local/bin/python3", "3.11.4"),
        ])
        .unwrap();
        assert_eq!(winner.version(), "3.11.4");
        assert_eq!(winner.path(), Path::new("/usr/local/bin/python3"));
    }

    #[test]
    fn test_select_latest_numeric_not_lexical() {
        let winner = latest(vec![
            info("/usr/bin/java", "1.8.0_302"),
            info("/usr/local/bin/java", "11.0.16"),
        ])
        .unwrap();
        assert_eq!(winner.path(), Path::new("/usr/local/bin/java"));
    }

    #[test]
    fn test_select_latest_tie_keeps_first() {
        let winner = latest(vec![
            info("/a/tool", "3.11"),
            info("/b/tool", "3.11.0"),
            info("/c/tool", "v3.11.0"),
        ])
        .unwrap();
        assert_eq!(winner.path(), Path::new("/a/tool"));
    }

    #[test]
    fn test_select_latest_release_beats_pre_release() {
        let winner = latest(vec![
            info("/a/tool", "3.11.4-rc1"),
            info("/b/tool", "3.11.4"),
        ])
        .unwrap();
        assert_eq!(winner.path(), Path::new("/b/tool"));
    }

    #[test]
    fn test_select_latest_policy_changes_winner() {
        let infos = vec![info("/a/tool", "1.0.0"), info("/b/tool", "1.0.0+build5")];

        let default = select_latest(infos.clone(), &VersionComparator::default()).unwrap();
        assert_eq!(default.path(), Path::new("/a/tool"));

        // Build metadata is ignored, so the tie goes to the first candidate.
        let strict =
            select_latest(infos, &VersionComparator::new(ComparePolicy::Semver)).unwrap();
        assert_eq!(strict.path(), Path::new("/a/tool"));

        let infos = vec![info("/a/tool", "1.0.0-alpha.9"), info("/b/tool", "1.0.0-alpha.10")];
        let default = select_latest(infos.clone(), &VersionComparator::default()).unwrap();
        assert_eq!(default.path(), Path::new("/a/tool"));
        let strict =
            select_latest(infos, &VersionComparator::new(ComparePolicy::Semver)).unwrap();
        assert_eq!(strict.path(), Path::new("/b/tool"));
    }

    #[test]
    fn test_select_latest_order_independent() {
        let infos = vec![
            info("/a/tool", "2.0"),
            info("/b/tool", "10.1"),
            info("/c/tool", "garbage"),
            info("/d/tool", "9.9.9"),
        ];
        let mut reversed = infos.clone();
        reversed.reverse();

        let forward = latest(infos).unwrap();
        let backward = latest(reversed).unwrap();
        assert_eq!(forward.path(), backward.path());
        assert_eq!(forward.version(), "10.1");
    }

    #[test]
    fn test_select_latest_empty() {
        assert!(latest(Vec::new()).is_none());
    }

    #[tokio::test]
    async fn test_get_version_nonexistent() {
        let result = get_version(Path::new("/nonexistent/path/to/tool")).await;
        assert!(matches!(result, Err(ProbeError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_find_latest_nonexistent_command() {
        let result = find_latest_command("definitely_not_a_real_command_xyz123").await;
        assert!(matches!(result, Err(LookupError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_probe_all_keeps_order() {
        let candidates = vec![
            PathBuf::from("/nonexistent/one"),
            PathBuf::from("/nonexistent/two"),
        ];
        let results = probe_all(&candidates, &SearchOptions::default()).await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap_err().path(), candidates[0]);
        assert_eq!(results[1].as_ref().unwrap_err().path(), candidates[1]);
    }
}
