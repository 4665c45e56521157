// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Hard ceiling for a single gcloud attempt.
///
/// Callers normally stop waiting much earlier (see the executor's outer
/// timeout); this only reaps processes that hang indefinitely.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(120);

/// Outcome of a subprocess that did not produce a [`CappedOutput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubprocessError {
    /// The process could not be spawned or awaited
    Io(String),
    /// The timeout elapsed and the child was killed
    TimedOut(Duration),
    /// Stdout passed the byte limit and the child was killed
    OutputTooLarge(usize),
}

/// Exit status and captured streams of a finished child
#[derive(Debug)]
pub struct CappedOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Milliseconds of `duration`, saturating at `u64::MAX`.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Run a subprocess with a timeout, reading at most `limit` bytes of stdout.
///
/// Stdout is read incrementally; once it passes `limit` the child is killed
/// and [`SubprocessError::OutputTooLarge`] is returned without buffering the
/// rest. Stderr keeps its first `limit` bytes and drains the remainder.
/// The child is killed if the timeout elapses (`kill_on_drop`).
pub async fn run_capped(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
    limit: usize,
) -> Result<CappedOutput, SubprocessError> {
    cmd.kill_on_drop(true)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let io_err = |e: std::io::Error| SubprocessError::Io(format!("{} failed: {}", description, e));

    let collect = async {
        let mut child = cmd.spawn().map_err(io_err)?;
        let stdout = child.stdout.take();
        let stderr_task = tokio::spawn(read_prefix(child.stderr.take(), limit, true));

        let (stdout, overflowed) = match read_prefix(stdout, limit, false).await {
            Ok(read) => read,
            Err(e) => {
                stderr_task.abort();
                return Err(io_err(e));
            }
        };
        if overflowed {
            stderr_task.abort();
            let _ = child.start_kill();
            return Err(SubprocessError::OutputTooLarge(limit));
        }
        let (stderr, _) = stderr_task
            .await
            .map_err(|e| SubprocessError::Io(format!("{} failed: {}", description, e)))?
            .map_err(io_err)?;
        let status = child.wait().await.map_err(io_err)?;
        Ok(CappedOutput {
            status,
            stdout,
            stderr,
        })
    };

    match tokio::time::timeout(timeout, collect).await {
        Ok(result) => result,
        Err(_elapsed) => {
            tracing::debug!(
                description,
                timeout_ms = millis(timeout),
                "subprocess timed out"
            );
            Err(SubprocessError::TimedOut(timeout))
        }
    }
}

/// Read up to `limit` bytes; the flag is set when the stream had more.
///
/// With `drain` the tail is read and discarded so the child never blocks
/// on a full pipe; without it reading stops at the first excess byte.
async fn read_prefix<R>(
    reader: Option<R>,
    limit: usize,
    drain: bool,
) -> std::io::Result<(Vec<u8>, bool)>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let Some(mut reader) = reader else {
        return Ok((buf, false));
    };
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    (&mut reader).take(cap).read_to_end(&mut buf).await?;
    if buf.len() <= limit {
        return Ok((buf, false));
    }
    buf.truncate(limit);
    if drain {
        tokio::io::copy(&mut reader, &mut tokio::io::sink()).await?;
    }
    Ok((buf, true))
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
