// outrocut-core/tests/common/mod.rs
//
// Deterministic stand-ins for ffprobe and ffmpeg shared by the integration tests.

#![allow(dead_code)]

use outrocut_core::error::{CoreError, CoreResult};
use outrocut_core::{Color, MediaProber, PixelSampler, Timestamp, Trimmer};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTRO_BACKGROUND: Color = Color::new(21, 20, 25);
pub const CONTENT: Color = Color::new(180, 120, 90);

pub fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, b"dummy video").expect("Failed to write dummy file");
    path
}

/// Reports fixed properties, or fails the chosen probe.
pub struct FakeProber {
    pub duration_secs: f64,
    pub frame_count: u64,
    pub dimensions: (u32, u32),
    pub fail_dimensions: bool,
}

impl FakeProber {
    pub fn portrait(frame_count: u64, fps: f64) -> Self {
        Self {
            duration_secs: frame_count as f64 / fps,
            frame_count,
            dimensions: (1080, 1920),
            fail_dimensions: false,
        }
    }
}

impl MediaProber for FakeProber {
    fn probe_duration(&self, _path: &Path) -> CoreResult<f64> {
        Ok(self.duration_secs)
    }

    fn probe_frame_count(&self, _path: &Path) -> CoreResult<u64> {
        Ok(self.frame_count)
    }

    fn probe_dimensions(&self, _path: &Path) -> CoreResult<(u32, u32)> {
        if self.fail_dimensions {
            return Err(CoreError::DimensionRange {
                output: "1".to_string(),
                length: 1,
            });
        }
        Ok(self.dimensions)
    }
}

/// Paints every corner with the outro background from `outro_start` onward.
///
/// Timestamps are mapped back to frames with the same constant frame rate
/// the orchestrator derives from the probe.
pub struct SuffixSampler {
    pub fps: f64,
    pub outro_start: Option<u64>,
    pub samples: Cell<u64>,
}

impl SuffixSampler {
    pub fn new(fps: f64, outro_start: Option<u64>) -> Self {
        Self {
            fps,
            outro_start,
            samples: Cell::new(0),
        }
    }
}

impl PixelSampler for SuffixSampler {
    fn sample_pixel(&self, _path: &Path, timestamp: Timestamp, _x: u32, _y: u32) -> CoreResult<Color> {
        self.samples.set(self.samples.get() + 1);
        let frame = (timestamp.as_millis() * self.fps / 1000.0).round() as u64;
        match self.outro_start {
            Some(start) if frame >= start => Ok(OUTRO_BACKGROUND),
            _ => Ok(CONTENT),
        }
    }
}

/// Records each trim and writes a placeholder output file.
#[derive(Default)]
pub struct RecordingTrimmer {
    pub calls: RefCell<Vec<(PathBuf, PathBuf, Timestamp)>>,
}

impl Trimmer for RecordingTrimmer {
    fn trim(&self, path: &Path, output: &Path, end: Timestamp) -> CoreResult<()> {
        fs::write(output, b"trimmed")?;
        self.calls
            .borrow_mut()
            .push((path.to_path_buf(), output.to_path_buf(), end));
        Ok(())
    }
}
