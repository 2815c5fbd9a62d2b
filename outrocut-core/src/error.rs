//! Error types for outrocut-core.
//!
//! Every failure in the library surfaces as a [`CoreError`]. Detection
//! outcomes that the user has to act on (`NoOutroDetected`,
//! `NoContentBeforeOutro`) are separate variants so callers can report them
//! differently from tool or I/O failures.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by outrocut-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Dependency not found: '{0}'. Install it or point the configuration at the binary.")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed while waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Command '{command}' timed out after {timeout:?}")]
    CommandTimeout { command: String, timeout: Duration },

    #[error("Failed to parse ffprobe output: {0}")]
    ProbeParse(String),

    #[error("Dimension output '{output}' has length {length}, expected 3 to 9 characters")]
    DimensionRange { output: String, length: usize },

    #[error("Dimension output '{0}' is not of the form WIDTHxHEIGHT")]
    DimensionFormat(String),

    #[error("Invalid media: {0}")]
    InvalidMedia(String),

    #[error("Failed to decode pixel sample: {0}")]
    SampleDecode(String),

    #[error("No outro detected")]
    NoOutroDetected,

    #[error(
        "Outro begins at frame {boundary}; nothing remains before it after {padding} frames of padding"
    )]
    NoContentBeforeOutro { boundary: u64, padding: u64 },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl CoreError {
    /// True for failures of ffmpeg/ffprobe themselves rather than of their output.
    #[must_use]
    pub fn is_external_tool_error(&self) -> bool {
        matches!(
            self,
            CoreError::DependencyNotFound(_)
                | CoreError::CommandStart(..)
                | CoreError::CommandWait(..)
                | CoreError::CommandFailed { .. }
                | CoreError::CommandTimeout { .. }
        )
    }
}

/// Result type for outrocut-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

pub fn command_wait_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}
