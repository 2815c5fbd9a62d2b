//! Process execution with bounded waiting.
//!
//! Every ffmpeg/ffprobe invocation goes through [`run_command`]. Stdout and
//! stderr are drained on reader threads while the main thread polls the child,
//! so a child that writes a lot cannot stall on a full pipe and a child that
//! hangs is killed once the timeout expires.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error};
use log::{debug, error, trace};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often a running child is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs `cmd` to completion and returns its stdout.
///
/// `name` identifies the command in errors and logs (e.g. "ffprobe (duration)").
/// A non-zero exit becomes [`CoreError::CommandFailed`] carrying stderr.
///
/// On timeout the child is killed and the reader threads are detached rather
/// than joined: a grandchild that inherited the pipes can keep them open long
/// after the child is gone.
pub fn run_command(cmd: &mut Command, name: &str, timeout: Option<Duration>) -> CoreResult<String> {
    debug!("Running {name}: {cmd:?}");

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            error!("Failed to spawn {name}: {e}");
            command_start_error(name, e)
        })?;

    let stdout_handle = spawn_reader(child.stdout.take());
    let stderr_handle = spawn_reader(child.stderr.take());

    let status = match timeout {
        Some(timeout) => {
            let start = Instant::now();
            loop {
                match child.try_wait() {
                    Ok(Some(status)) => break status,
                    Ok(None) if start.elapsed() >= timeout => {
                        error!("{name} timed out after {timeout:?}, killing it");
                        reap(&mut child);
                        drop(stdout_handle);
                        drop(stderr_handle);
                        return Err(CoreError::CommandTimeout {
                            command: name.to_string(),
                            timeout,
                        });
                    }
                    Ok(None) => thread::sleep(POLL_INTERVAL),
                    Err(e) => {
                        reap(&mut child);
                        return Err(command_wait_error(name, e));
                    }
                }
            }
        }
        None => child.wait().map_err(|e| command_wait_error(name, e))?,
    };

    let stdout = String::from_utf8_lossy(&stdout_handle.join().unwrap_or_default()).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_handle.join().unwrap_or_default()).into_owned();
    trace!("{name} stdout: {}", stdout.trim_end());

    if !status.success() {
        error!("{name} exited with {status}: {}", stderr.trim_end());
        return Err(command_failed_error(name, status, stderr.trim_end()));
    }

    Ok(stdout)
}

/// Kills `child` and collects its exit status so no zombie is left behind.
fn reap(child: &mut Child) {
    // The child may exit between try_wait and kill.
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = source {
            if let Err(e) = reader.read_to_end(&mut buf) {
                debug!("Stopped reading child output: {e}");
            }
        }
        buf
    })
}
