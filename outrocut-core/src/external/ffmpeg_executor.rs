// ============================================================================
// outrocut-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Pixel Sampling and Trimming
//
// This module provides the ffmpeg-backed implementations of PixelSampler and
// Trimmer. Commands are built with ffmpeg-sidecar's FfmpegCommand and run
// through the bounded runner in external::command.
//
// KEY COMPONENTS:
// - FfmpegPixelSampler: decodes one 1x1 cropped frame to a raw YUV file
// - FfmpegTrimmer: stream-copies the prefix of a video
// - build_sample_command / build_trim_command: pure command construction

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::command::run_command;
use crate::external::ffmpeg_builder::FfmpegCommandBuilder;
use crate::external::{PixelSampler, Trimmer};
use crate::processing::color::Color;
use crate::processing::timing::Timestamp;
use crate::temp_files;
use ffmpeg_sidecar::command::FfmpegCommand;
use log::{info, trace};
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Pixel Sampling ---

/// Builds the command that writes the YUV value of pixel `(x, y)` at
/// `timestamp` to `output` as three raw bytes.
///
/// ffmpeg clamps the crop origin into the frame, so coordinates on the far
/// edge select the last column/row.
#[must_use]
pub fn build_sample_command(
    ffmpeg_path: &Path,
    input_path: &Path,
    timestamp: Timestamp,
    x: u32,
    y: u32,
    output: &Path,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new(ffmpeg_path).build();
    cmd.args(["-ss", &timestamp.to_ffmpeg_seek()]);
    cmd.input(input_path);
    cmd.args(["-vf", &format!("crop=1:1:{x}:{y}:exact=1")]);
    cmd.args(["-frames:v", "1"]);
    cmd.args(["-pix_fmt", "yuv444p"]);
    cmd.args(["-f", "rawvideo"]);
    cmd.output(output);
    cmd
}

/// Converts the bytes of a 1x1 `yuv444p` raw frame to RGB.
pub fn decode_yuv_sample(bytes: &[u8]) -> CoreResult<Color> {
    match bytes {
        [y, u, v, ..] => Ok(Color::from_yuv(*y, *u, *v)),
        _ => Err(CoreError::SampleDecode(format!(
            "expected 3 bytes of YUV data, ffmpeg wrote {}",
            bytes.len()
        ))),
    }
}

/// [`PixelSampler`] that decodes a single cropped frame with ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegPixelSampler {
    ffmpeg_path: PathBuf,
    sample_dir: PathBuf,
    timeout: Option<Duration>,
}

impl FfmpegPixelSampler {
    pub fn new(ffmpeg_path: impl Into<PathBuf>, sample_dir: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            sample_dir: sample_dir.into(),
            timeout,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(&config.ffmpeg_path, config.sample_dir(), config.command_timeout)
    }
}

impl PixelSampler for FfmpegPixelSampler {
    fn sample_pixel(&self, path: &Path, timestamp: Timestamp, x: u32, y: u32) -> CoreResult<Color> {
        // Deleted when `artifact` drops, whichever way this function returns.
        let artifact = temp_files::create_temp_file(&self.sample_dir, "outro_pixel", "yuv")?;

        let mut cmd = build_sample_command(&self.ffmpeg_path, path, timestamp, x, y, artifact.path());
        run_command(cmd.as_inner_mut(), "ffmpeg (pixel sample)", self.timeout)?;

        let bytes = std::fs::read(artifact.path())?;
        let color = decode_yuv_sample(&bytes)?;
        trace!("Pixel ({x}, {y}) at {timestamp}: {color}");
        Ok(color)
    }
}

// --- Trimming ---

/// Builds the stream-copy command that keeps `[0, end)` of `input_path`.
#[must_use]
pub fn build_trim_command(ffmpeg_path: &Path, input_path: &Path, output_path: &Path, end: Timestamp) -> FfmpegCommand {
    let mut cmd = FfmpegCommandBuilder::new(ffmpeg_path).build();
    cmd.input(input_path);
    cmd.args(["-ss", "0"]);
    cmd.args(["-t", &end.to_ffmpeg_seek()]);
    cmd.args(["-c:v", "copy"]);
    cmd.args(["-c:a", "copy"]);
    cmd.output(output_path);
    cmd
}

/// [`Trimmer`] that stream-copies with ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegTrimmer {
    ffmpeg_path: PathBuf,
    timeout: Option<Duration>,
}

impl FfmpegTrimmer {
    pub fn new(ffmpeg_path: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(&config.ffmpeg_path, config.command_timeout)
    }
}

impl Trimmer for FfmpegTrimmer {
    fn trim(&self, path: &Path, output: &Path, end: Timestamp) -> CoreResult<()> {
        let mut cmd = build_trim_command(&self.ffmpeg_path, path, output, end);
        run_command(cmd.as_inner_mut(), "ffmpeg (trim)", self.timeout)?;
        info!("Wrote {} (ends at {end})", output.display());
        Ok(())
    }
}
