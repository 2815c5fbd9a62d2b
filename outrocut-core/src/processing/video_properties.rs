//! Stream properties reported by the media probe.

use crate::error::{CoreError, CoreResult};
use crate::processing::timing::derive_fps;

/// Duration, frame count and dimensions of a video's first stream.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoProperties {
    pub duration_secs: f64,
    pub frame_count: u64,
    pub width: u32,
    pub height: u32,
}

impl VideoProperties {
    /// Average frame rate, `frame_count / duration_secs`.
    pub fn fps(&self) -> CoreResult<f64> {
        derive_fps(self.frame_count, self.duration_secs)
    }

    /// Rejects properties the search cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidMedia(format!(
                "video dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.fps().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::timing::frame_to_timestamp;

    fn props() -> VideoProperties {
        VideoProperties {
            duration_secs: 20.0,
            frame_count: 600,
            width: 1080,
            height: 1920,
        }
    }

    #[test]
    fn test_fps_and_timestamps() {
        let props = props();
        assert!((props.fps().unwrap() - 30.0).abs() < 1e-9);
        let fps = props.fps().unwrap();
        assert_eq!(frame_to_timestamp(fps, 542).to_ffmpeg_seek(), "00:00:18.066");
    }

    #[test]
    fn test_validate_rejects_degenerate_streams() {
        assert!(props().validate().is_ok());
        assert!(VideoProperties { width: 0, ..props() }.validate().is_err());
        assert!(VideoProperties { frame_count: 0, ..props() }.validate().is_err());
        assert!(VideoProperties { duration_secs: -1.0, ..props() }.validate().is_err());
    }
}
