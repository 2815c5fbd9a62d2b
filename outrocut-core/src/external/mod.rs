// ============================================================================
// outrocut-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffmpeg and ffprobe
//
// This module encapsulates every interaction with the external command-line
// tools. The detection core only sees the three traits defined here
// (MediaProber, PixelSampler, Trimmer); the ffmpeg/ffprobe implementations
// live in the submodules and can be swapped for fakes in tests.

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::processing::color::Color;
use crate::processing::timing::Timestamp;
use crate::processing::video_properties::VideoProperties;

// ---- External crate imports ----
use log::{debug, warn};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Bounded process execution shared by all tool invocations
pub mod command;

/// ffmpeg command construction with the flags every invocation needs
pub mod ffmpeg_builder;

/// Pixel sampling and trimming through ffmpeg
pub mod ffmpeg_executor;

/// Duration, frame count and dimension probing through ffprobe
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use command::run_command;
pub use ffmpeg_builder::FfmpegCommandBuilder;
pub use ffmpeg_executor::{FfmpegPixelSampler, FfmpegTrimmer, build_sample_command, build_trim_command};
pub use ffprobe_executor::{FfprobeProber, parse_dimensions, parse_duration, parse_frame_count};

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// Reports the stream properties the search needs.
pub trait MediaProber {
    /// Container duration in seconds.
    fn probe_duration(&self, path: &Path) -> CoreResult<f64>;

    /// Number of decoded frames in the first video stream.
    fn probe_frame_count(&self, path: &Path) -> CoreResult<u64>;

    /// `(width, height)` of the first video stream.
    fn probe_dimensions(&self, path: &Path) -> CoreResult<(u32, u32)>;

    /// Runs the three probes in order: duration, frame count, dimensions.
    fn probe(&self, path: &Path) -> CoreResult<VideoProperties> {
        let duration_secs = self.probe_duration(path)?;
        let frame_count = self.probe_frame_count(path)?;
        let (width, height) = self.probe_dimensions(path)?;
        Ok(VideoProperties {
            duration_secs,
            frame_count,
            width,
            height,
        })
    }
}

/// Reads the color of one pixel of the frame shown at a timestamp.
pub trait PixelSampler {
    fn sample_pixel(&self, path: &Path, timestamp: Timestamp, x: u32, y: u32) -> CoreResult<Color>;
}

/// Writes the prefix `[0, end)` of a video to a new file without re-encoding.
pub trait Trimmer {
    fn trim(&self, path: &Path, output: &Path, end: Timestamp) -> CoreResult<()>;
}

impl<T: MediaProber + ?Sized> MediaProber for &T {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        (**self).probe_duration(path)
    }

    fn probe_frame_count(&self, path: &Path) -> CoreResult<u64> {
        (**self).probe_frame_count(path)
    }

    fn probe_dimensions(&self, path: &Path) -> CoreResult<(u32, u32)> {
        (**self).probe_dimensions(path)
    }
}

impl<T: PixelSampler + ?Sized> PixelSampler for &T {
    fn sample_pixel(&self, path: &Path, timestamp: Timestamp, x: u32, y: u32) -> CoreResult<Color> {
        (**self).sample_pixel(path, timestamp, x, y)
    }
}

impl<T: Trimmer + ?Sized> Trimmer for &T {
    fn trim(&self, path: &Path, output: &Path, end: Timestamp) -> CoreResult<()> {
        (**self).trim(path, output, end)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external binary can be started.
///
/// Runs `<binary> -version` through [`run_command`], bounded by `timeout`.
/// A binary that starts but exits non-zero still counts as present.
///
/// # Returns
///
/// * `Ok(())` - The binary started
/// * `Err(CoreError::DependencyNotFound)` - Nothing at that name/path
/// * `Err(CoreError::CommandStart)` - It exists but could not be started
/// * `Err(CoreError::CommandTimeout)` - It did not finish within `timeout`
pub fn check_dependency(binary: &Path, timeout: Option<Duration>) -> CoreResult<()> {
    let name = binary.display().to_string();
    let mut cmd = Command::new(binary);
    cmd.arg("-version");

    match run_command(&mut cmd, &name, timeout) {
        Ok(_) | Err(CoreError::CommandFailed { .. }) => {
            debug!("Found dependency: {name}");
            Ok(())
        }
        Err(CoreError::CommandStart(_, e)) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Dependency '{name}' not found.");
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => Err(e),
    }
}

/// Checks ffprobe, then ffmpeg, as configured.
pub fn check_dependencies(config: &CoreConfig) -> CoreResult<()> {
    check_dependency(&config.ffprobe_path, config.command_timeout)?;
    check_dependency(&config.ffmpeg_path, config.command_timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Option<Duration> = Some(Duration::from_secs(5));

    #[test]
    fn test_missing_dependency_reported() {
        let err = check_dependency(Path::new("outrocut-no-such-tool"), TIMEOUT).unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(name) if name == "outrocut-no-such-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_present_dependency_found() {
        // `true` ignores -version and exits 0.
        assert!(check_dependency(Path::new("true"), TIMEOUT).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_still_found() {
        // `false` starts fine and exits 1.
        assert!(check_dependency(Path::new("false"), TIMEOUT).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_hanging_dependency_times_out() {
        use std::os::unix::fs::PermissionsExt;
        use std::time::Instant;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ffprobe");
        std::fs::write(&script, "#!/bin/sh\nsleep 4\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = CoreConfig {
            ffprobe_path: script,
            command_timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };
        let started = Instant::now();
        let err = check_dependencies(&config).unwrap_err();
        assert!(matches!(err, CoreError::CommandTimeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(2), "took {:?}", started.elapsed());
    }

    #[test]
    fn test_check_dependencies_reports_ffprobe_first() {
        let config = CoreConfig {
            ffmpeg_path: "outrocut-missing-ffmpeg".into(),
            ffprobe_path: "outrocut-missing-ffprobe".into(),
            ..Default::default()
        };
        let err = check_dependencies(&config).unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(name) if name == "outrocut-missing-ffprobe"));
    }
}
