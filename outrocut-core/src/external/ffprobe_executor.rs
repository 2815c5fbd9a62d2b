//! FFprobe integration for media analysis.
//!
//! Each property is queried with its own ffprobe invocation using plain-text
//! output formats, and the raw text is parsed strictly: anything that is not
//! exactly the expected shape is an error rather than a guess.
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::MediaProber;
use crate::external::command::run_command;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Length bounds of a `WIDTHxHEIGHT` answer ("1x1" up to "9999x9999").
const DIMENSION_OUTPUT_LEN: std::ops::RangeInclusive<usize> = 3..=9;

/// [`MediaProber`] backed by the ffprobe binary.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    ffprobe_path: PathBuf,
    timeout: Option<Duration>,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(&config.ffprobe_path, config.command_timeout)
    }

    fn query(&self, context: &str, args: &[&str], input_path: &Path) -> CoreResult<String> {
        let mut cmd = Command::new(&self.ffprobe_path);
        cmd.args(args).arg(input_path);
        run_command(&mut cmd, &format!("ffprobe ({context})"), self.timeout)
    }
}

impl MediaProber for FfprobeProber {
    fn probe_duration(&self, path: &Path) -> CoreResult<f64> {
        let raw = self.query(
            "duration",
            &[
                "-v", "error",
                "-show_entries", "format=duration",
                "-of", "default=noprint_wrappers=1:nokey=1",
            ],
            path,
        )?;
        let duration = parse_duration(&raw)?;
        debug!("Duration of {}: {duration}s", path.display());
        Ok(duration)
    }

    fn probe_frame_count(&self, path: &Path) -> CoreResult<u64> {
        let raw = self.query(
            "frame count",
            &[
                "-v", "error",
                "-select_streams", "v:0",
                "-count_frames",
                "-show_entries", "stream=nb_read_frames",
                "-of", "csv=p=0",
            ],
            path,
        )?;
        let frames = parse_frame_count(&raw)?;
        debug!("Frame count of {}: {frames}", path.display());
        Ok(frames)
    }

    fn probe_dimensions(&self, path: &Path) -> CoreResult<(u32, u32)> {
        let raw = self.query(
            "dimensions",
            &[
                "-v", "error",
                "-select_streams", "v:0",
                "-show_entries", "stream=width,height",
                "-of", "csv=s=x:p=0",
            ],
            path,
        )?;
        let (width, height) = parse_dimensions(&raw)?;
        debug!("Dimensions of {}: {width}x{height}", path.display());
        Ok((width, height))
    }
}

/// Parses the `format=duration` answer, in seconds.
pub fn parse_duration(raw: &str) -> CoreResult<f64> {
    let text = raw.trim();
    text.parse::<f64>()
        .ok()
        .filter(|d| d.is_finite())
        .ok_or_else(|| CoreError::ProbeParse(format!("duration '{text}' is not a number")))
}

/// Parses the `nb_read_frames` answer.
pub fn parse_frame_count(raw: &str) -> CoreResult<u64> {
    let text = raw.trim();
    text.parse::<u64>()
        .map_err(|_| CoreError::ProbeParse(format!("frame count '{text}' is not an integer")))
}

/// Parses a `WIDTHxHEIGHT` answer.
pub fn parse_dimensions(raw: &str) -> CoreResult<(u32, u32)> {
    let text = raw.trim();
    if !DIMENSION_OUTPUT_LEN.contains(&text.len()) {
        return Err(CoreError::DimensionRange {
            output: text.to_string(),
            length: text.len(),
        });
    }

    let fields: Vec<&str> = text.split('x').collect();
    let [width, height] = fields.as_slice() else {
        return Err(CoreError::DimensionFormat(text.to_string()));
    };

    match (width.parse::<u32>(), height.parse::<u32>()) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(CoreError::DimensionFormat(text.to_string())),
    }
}
