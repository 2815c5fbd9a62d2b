// ============================================================================
// outrocut-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses outrocut-core's error type. This module adds a context
// extension trait for CLI-side failures and the mapping from errors to
// process exit codes.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: anyhow-style context on Result and Option
// - exit_code: process exit status for an error

// ---- Internal crate imports ----
use outrocut_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// EXIT CODES
// ============================================================================

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_TOOL_FAILURE: i32 = 2;
pub const EXIT_NO_OUTRO: i32 = 3;
pub const EXIT_NO_CONTENT: i32 = 4;

/// Exit status reported for `err`.
///
/// Detection outcomes get their own codes so scripts can skip videos that
/// have no outro without treating them as failures. A missing, crashing or
/// hung ffmpeg/ffprobe is reported apart from bad input.
#[must_use]
pub fn exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::NoOutroDetected => EXIT_NO_OUTRO,
        CoreError::NoContentBeforeOutro { .. } => EXIT_NO_CONTENT,
        e if e.is_external_tool_error() => EXIT_TOOL_FAILURE,
        _ => EXIT_FAILURE,
    }
}

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// This trait provides methods similar to anyhow's context methods
/// but converts to CoreError instead.
pub trait CliErrorContext<T> {
    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {core_error}", f()))
        })
    }
}

impl<T> CliErrorContext<T> for Option<T> {
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| CoreError::OperationFailed(f().to_string()))
    }
}
