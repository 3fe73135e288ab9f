//! Running an executable with a version flag under a timeout.

use crate::ProbeError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// How long to keep reading output once the process has exited.
const EXIT_GRACE: Duration = Duration::from_millis(100);

/// Run `path flag` and capture its combined output.
///
/// Stdout and stderr are each read up to `max_bytes`; anything beyond is
/// discarded and the pipe is closed. The exit status is ignored, since many
/// tools print their version and then exit non-zero. Once the process exits,
/// reading stops after a short grace period even if a background child
/// still holds the pipes. The whole run is bounded by `limit`; on expiry the
/// child is killed.
///
/// # Returns
///
/// The stdout text followed by the stderr text (lossily decoded), or:
/// - `PermissionDenied` if the executable may not be run
/// - `Spawn` for any other failure to start or wait on the process
/// - `Timeout` if the process outlives `limit`
pub(crate) async fn capture_output(
    path: &Path,
    flag: &str,
    limit: Duration,
    max_bytes: usize,
) -> Result<String, ProbeError> {
    let mut child = Command::new(path)
        .arg(flag)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| spawn_error(path, e))?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let run = async {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = {
            let reads = async {
                tokio::join!(
                    read_capped(stdout, max_bytes, &mut out),
                    read_capped(stderr, max_bytes, &mut err)
                )
            };
            tokio::pin!(reads);

            // Exit decides. A background child may keep the pipes open long
            // after the tool itself is done.
            let exited = tokio::select! {
                _ = &mut reads => None,
                status = child.wait() => Some(status),
            };
            match exited {
                Some(status) => {
                    let _ = timeout(EXIT_GRACE, &mut reads).await;
                    status
                }
                None => child.wait().await,
            }
        }
        .map_err(|e| spawn_error(path, e))?;
        trace!(path = %path.display(), flag, ?status, "probe exited");
        Ok::<_, ProbeError>((out, err))
    };

    let (out, err) = timeout(limit, run)
        .await
        .map_err(|_| ProbeError::Timeout {
            path: path.to_path_buf(),
            timeout: limit,
        })??;

    Ok(combine(&out, &err))
}

/// Append up to `max_bytes` from `pipe` into `buf`.
///
/// Reads chunk by chunk so whatever arrived before cancellation stays in
/// `buf`.
async fn read_capped<R>(pipe: Option<R>, max_bytes: usize, buf: &mut Vec<u8>)
where
    R: AsyncRead + Unpin,
{
    let Some(mut pipe) = pipe else {
        return;
    };
    let mut chunk = [0u8; 4096];
    while buf.len() < max_bytes {
        match pipe.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                let keep = n.min(max_bytes - buf.len());
                buf.extend_from_slice(&chunk[..keep]);
            }
            Err(e) => {
                trace!(error = %e, "error reading probe output");
                break;
            }
        }
    }
}

fn combine(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(stderr));
    }
    text
}

fn spawn_error(path: &Path, e: std::io::Error) -> ProbeError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        ProbeError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        ProbeError::Spawn {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}
