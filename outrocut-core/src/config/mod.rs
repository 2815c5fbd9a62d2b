//! Configuration structures and constants for the outrocut-core library.
//!
//! All tunables live in [`CoreConfig`], which is built by the consumer (the CLI
//! or a test) and handed to the orchestrator at construction time.

mod builder;

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;
use std::time::Duration;

pub use builder::CoreConfigBuilder;

// Default constants

/// Frames subtracted from the detected boundary before trimming.
/// The platform freezes the last moments of the clip before the outro's
/// visual transition, so the cut lands a little earlier than the boundary.
pub const DEFAULT_OUTRO_FRAME_PADDING: u64 = 8;

/// First backward step of the boundary search, in frames.
pub const DEFAULT_INITIAL_JUMP: u64 = 60;

/// Upper bound on a single ffmpeg/ffprobe invocation.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// ffmpeg binary resolved through PATH.
pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

/// ffprobe binary resolved through PATH.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.mp4";

/// Main configuration structure for the outrocut-core library.
///
/// # Examples
///
/// ```rust
/// use outrocut_core::config::CoreConfigBuilder;
/// use std::time::Duration;
///
/// let config = CoreConfigBuilder::new()
///     .outro_frame_padding(10)
///     .command_timeout(Some(Duration::from_secs(30)))
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// ffmpeg binary used for pixel sampling and trimming
    pub ffmpeg_path: PathBuf,

    /// ffprobe binary used for duration, frame count and dimensions
    pub ffprobe_path: PathBuf,

    /// Directory for pixel sample artifacts (defaults to the system temp dir)
    pub temp_dir: Option<PathBuf>,

    /// Frames cut before the detected outro boundary
    pub outro_frame_padding: u64,

    /// First step of the backward search, must be non-zero
    pub initial_jump: u64,

    /// Per-invocation timeout for external tools; `None` waits forever
    pub command_timeout: Option<Duration>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_PATH),
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
            temp_dir: None,
            outro_frame_padding: DEFAULT_OUTRO_FRAME_PADDING,
            initial_jump: DEFAULT_INITIAL_JUMP,
            command_timeout: Some(Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS)),
        }
    }
}

impl CoreConfig {
    /// Checks the values a builder or CLI may have set out of range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.initial_jump == 0 {
            return Err(CoreError::Config(
                "initial jump must be at least 1 frame".to_string(),
            ));
        }

        if self.command_timeout.is_some_and(|t| t.is_zero()) {
            return Err(CoreError::Config(
                "command timeout must be non-zero (use no timeout instead)".to_string(),
            ));
        }

        if self.ffmpeg_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffmpeg path is empty".to_string()));
        }

        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path is empty".to_string()));
        }

        Ok(())
    }

    /// Directory pixel samples are written to.
    #[must_use]
    pub fn sample_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CoreConfig::default();
        assert_eq!(config.outro_frame_padding, 8);
        assert_eq!(config.initial_jump, 60);
        assert_eq!(config.command_timeout, Some(Duration::from_secs(120)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_jump_rejected() {
        let config = CoreConfig {
            initial_jump: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CoreConfig {
            command_timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CoreConfig {
            command_timeout: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_dir_falls_back_to_system_temp() {
        let config = CoreConfig::default();
        assert_eq!(config.sample_dir(), std::env::temp_dir());

        let config = CoreConfig {
            temp_dir: Some(PathBuf::from("/scratch")),
            ..Default::default()
        };
        assert_eq!(config.sample_dir(), PathBuf::from("/scratch"));
    }
}
