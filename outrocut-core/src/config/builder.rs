// ============================================================================
// outrocut-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig instances. Every field starts at the
// default from config/mod.rs, so callers only set what they override.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use outrocut_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .ffmpeg_path("/opt/ffmpeg/bin/ffmpeg")
///     .ffprobe_path("/opt/ffmpeg/bin/ffprobe")
///     .initial_jump(30)
///     .build();
/// assert_eq!(config.initial_jump, 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ffmpeg binary.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffmpeg_path = path.into();
        self
    }

    /// Sets the ffprobe binary.
    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffprobe_path = path.into();
        self
    }

    /// Sets the directory for pixel sample artifacts.
    ///
    /// # Arguments
    ///
    /// * `temp_dir` - Directory that receives the short-lived `.yuv` samples
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(temp_dir.into());
        self
    }

    /// Sets the number of frames trimmed before the detected boundary.
    pub fn outro_frame_padding(mut self, frames: u64) -> Self {
        self.config.outro_frame_padding = frames;
        self
    }

    /// Sets the first step of the backward search.
    pub fn initial_jump(mut self, frames: u64) -> Self {
        self.config.initial_jump = frames;
        self
    }

    /// Sets the timeout applied to every external tool invocation.
    pub fn command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    /// Builds the CoreConfig. Call [`CoreConfig::validate`] before use.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FFPROBE_PATH, DEFAULT_INITIAL_JUMP};

    #[test]
    fn test_builder_overrides_only_what_is_set() {
        let config = CoreConfigBuilder::new()
            .ffmpeg_path("/usr/local/bin/ffmpeg")
            .outro_frame_padding(3)
            .command_timeout(None)
            .temp_dir("/tmp/outrocut")
            .build();

        assert_eq!(config.ffmpeg_path, PathBuf::from("/usr/local/bin/ffmpeg"));
        assert_eq!(config.ffprobe_path, PathBuf::from(DEFAULT_FFPROBE_PATH));
        assert_eq!(config.outro_frame_padding, 3);
        assert_eq!(config.initial_jump, DEFAULT_INITIAL_JUMP);
        assert_eq!(config.command_timeout, None);
        assert_eq!(config.temp_dir, Some(PathBuf::from("/tmp/outrocut")));
    }
}
