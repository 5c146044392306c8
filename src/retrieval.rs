//! Raw unified-log retrieval via the `log show` command.
//!
//! This is the one blocking collaborator in the crate: it runs the OS
//! logging tool as a subprocess under a hard 30-second deadline and hands
//! the captured stdout to [`crate::parser::UnifiedLogParser`]. The three
//! ways it can fail are surfaced as distinct errors so callers can render
//! distinct diagnostics:
//!
//! - [`SiftError::RetrievalTimeout`] — the deadline passed; the child is
//!   killed.
//! - [`SiftError::LogToolNotFound`] — the `log` executable is not on this
//!   system.
//! - [`SiftError::RetrievalFailed`] — the tool ran and exited non-zero.
//!
//! A single bounded attempt is made; there are no retries.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{Result, SiftError};

/// Hard deadline for a `log show` invocation.
pub const RETRIEVAL_TIMEOUT: Duration = Duration::from_secs(30);

/// Polling interval while waiting for the child to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Fetch raw unified-log text for the given window, style, and predicate.
///
/// A blank predicate means no `--predicate` flag at all; the predicate is
/// otherwise passed through verbatim, never interpreted or validated here.
pub fn fetch_unified_log(predicate: &str, time_period: &str, style: &str) -> Result<String> {
    let args = build_args(predicate, time_period, style);
    run_with_timeout("log", &args, RETRIEVAL_TIMEOUT)
}

/// Build the `log show` argument vector.
fn build_args(predicate: &str, time_period: &str, style: &str) -> Vec<String> {
    let mut args = vec![
        "show".to_string(),
        "--last".to_string(),
        time_period.to_string(),
        "--style".to_string(),
        style.to_string(),
    ];
    if !predicate.trim().is_empty() {
        args.push("--predicate".to_string());
        args.push(predicate.to_string());
    }
    args
}

/// Run a command, capture stdout, and enforce a deadline.
///
/// Stdout and stderr are drained on background threads so a chatty child
/// cannot fill its pipes and stall before we notice the deadline.
fn run_with_timeout(program: &str, args: &[String], timeout: Duration) -> Result<String> {
    debug!(program, ?args, "spawning retrieval command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiftError::LogToolNotFound
            } else {
                SiftError::io(format!("Failed to spawn {program}"), e)
            }
        })?;

    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());

    let status = match wait_with_deadline(&mut child, timeout)? {
        Some(status) => status,
        None => {
            // Deadline passed: kill and reap so the readers see EOF.
            let _ = child.kill();
            let _ = child.wait();
            drain(stdout);
            drain(stderr);
            return Err(SiftError::RetrievalTimeout {
                seconds: timeout.as_secs(),
            });
        }
    };

    let stdout = drain(stdout);
    let stderr = drain(stderr);

    if !status.success() {
        return Err(SiftError::retrieval(
            status.code(),
            String::from_utf8_lossy(&stderr).trim().to_string(),
        ));
    }

    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

/// Poll the child until it exits or the deadline passes.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> Result<Option<std::process::ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child
            .try_wait()
            .map_err(|e| SiftError::io("Failed to wait for child process", e))?
        {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Drain a pipe to a buffer on a background thread.
fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn drain(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}
