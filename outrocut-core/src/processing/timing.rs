//! Frame index and timestamp conversion.
//!
//! Frame positions are turned into seek times using the average frame rate
//! (`frame_count / duration`). Variable frame rate sources drift slightly
//! under this model; the search tolerates it because the outro is long.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Zero-based index of a decoded frame.
pub type FrameIndex = u64;

/// A non-negative position in the video, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Builds a timestamp, clamping negative or NaN input to zero.
    #[must_use]
    pub fn from_millis(millis: f64) -> Self {
        if millis.is_nan() || millis < 0.0 {
            Self(0.0)
        } else {
            Self(millis)
        }
    }

    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn as_secs(self) -> f64 {
        self.0 / 1000.0
    }

    /// Formats as `HH:MM:SS.mmm`, truncating sub-millisecond remainders so the
    /// seek never lands past the frame it was computed from.
    #[must_use]
    pub fn to_ffmpeg_seek(self) -> String {
        let total_ms = self.0.floor() as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let millis = total_ms % 1000;
        format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ffmpeg_seek())
    }
}

/// Average frames per second of a video.
pub fn derive_fps(frame_count: u64, duration_secs: f64) -> CoreResult<f64> {
    if frame_count == 0 {
        return Err(CoreError::InvalidMedia(
            "video stream has no frames".to_string(),
        ));
    }
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(CoreError::InvalidMedia(format!(
            "video duration must be positive, got {duration_secs}"
        )));
    }
    Ok(frame_count as f64 / duration_secs)
}

/// Start time of `frame` under a constant `fps`.
#[must_use]
pub fn frame_to_timestamp(fps: f64, frame: FrameIndex) -> Timestamp {
    Timestamp::from_millis(frame as f64 * (1000.0 / fps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffmpeg_seek_format() {
        assert_eq!(Timestamp::from_millis(0.0).to_ffmpeg_seek(), "00:00:00.000");
        assert_eq!(Timestamp::from_millis(5.0).to_ffmpeg_seek(), "00:00:00.005");
        assert_eq!(Timestamp::from_millis(61_234.9).to_ffmpeg_seek(), "00:01:01.234");
        assert_eq!(Timestamp::from_millis(3_723_004.0).to_ffmpeg_seek(), "01:02:03.004");
    }

    #[test]
    fn test_negative_timestamp_clamped() {
        assert_eq!(Timestamp::from_millis(-12.0).as_millis(), 0.0);
        assert_eq!(Timestamp::from_millis(f64::NAN).as_millis(), 0.0);
    }

    #[test]
    fn test_frame_to_timestamp() {
        assert_eq!(frame_to_timestamp(30.0, 0).as_millis(), 0.0);
        assert!((frame_to_timestamp(30.0, 90).as_millis() - 3000.0).abs() < 1e-9);
        assert!((frame_to_timestamp(25.0, 542).as_secs() - 21.68).abs() < 1e-9);
        assert_eq!(frame_to_timestamp(30.0, 1).to_string(), "00:00:00.033");
    }

    #[test]
    fn test_derive_fps() {
        assert!((derive_fps(600, 20.0).unwrap() - 30.0).abs() < f64::EPSILON);
        assert!(matches!(derive_fps(0, 20.0), Err(CoreError::InvalidMedia(_))));
        assert!(matches!(derive_fps(600, 0.0), Err(CoreError::InvalidMedia(_))));
        assert!(matches!(derive_fps(600, f64::NAN), Err(CoreError::InvalidMedia(_))));
    }
}
