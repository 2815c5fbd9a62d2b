//! Outro frame classification by corner sampling.
//!
//! A frame belongs to the outro when the pixels near all four corners carry
//! the outro background color. Only the corners are sampled, so classifying
//! a frame costs at most four single-pixel decodes instead of a full frame.

use crate::error::CoreResult;
use crate::external::PixelSampler;
use crate::processing::color::is_outro_color;
use crate::processing::timing::{FrameIndex, Timestamp, frame_to_timestamp};
use crate::processing::video_properties::VideoProperties;
use log::trace;
use std::path::Path;

/// Pixel coordinates probed for each frame, in probing order.
///
/// The third corner takes the frame *width* as its row. On portrait video
/// that lands inside the frame rather than on the bottom-left corner; this
/// is the placement the color thresholds were tuned with.
#[must_use]
pub const fn corner_samples(width: u32, height: u32) -> [(u32, u32); 4] {
    [(1, 1), (width, 1), (1, width), (width, height)]
}

/// Decides whether a single frame is part of the outro.
#[derive(Debug, Clone)]
pub struct OutroClassifier<S> {
    sampler: S,
}

impl<S: PixelSampler> OutroClassifier<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Samples the corners of the frame at `timestamp`, stopping at the first
    /// one that is not outro-colored.
    pub fn classify(&self, video: &Path, timestamp: Timestamp, width: u32, height: u32) -> CoreResult<bool> {
        for (x, y) in corner_samples(width, height) {
            let color = self.sampler.sample_pixel(video, timestamp, x, y)?;
            if !is_outro_color(color) {
                trace!("{timestamp}: ({x}, {y}) is {color}, content");
                return Ok(false);
            }
        }
        trace!("{timestamp}: all corners match the outro background");
        Ok(true)
    }
}

/// Maps a frame index to "is this frame part of the outro".
///
/// The boundary search only talks to this trait, so it can be driven by the
/// real classifier or by any deterministic function of the frame index.
pub trait FrameClassifier {
    fn is_outro_frame(&mut self, frame: FrameIndex) -> CoreResult<bool>;
}

impl<F> FrameClassifier for F
where
    F: FnMut(FrameIndex) -> CoreResult<bool>,
{
    fn is_outro_frame(&mut self, frame: FrameIndex) -> CoreResult<bool> {
        self(frame)
    }
}

/// An [`OutroClassifier`] bound to one video and its frame rate.
pub struct VideoFrameClassifier<'a, S> {
    classifier: &'a OutroClassifier<S>,
    video: &'a Path,
    fps: f64,
    width: u32,
    height: u32,
}

impl<'a, S: PixelSampler> VideoFrameClassifier<'a, S> {
    pub fn new(classifier: &'a OutroClassifier<S>, video: &'a Path, properties: &VideoProperties, fps: f64) -> Self {
        Self {
            classifier,
            video,
            fps,
            width: properties.width,
            height: properties.height,
        }
    }
}

impl<S: PixelSampler> FrameClassifier for VideoFrameClassifier<'_, S> {
    fn is_outro_frame(&mut self, frame: FrameIndex) -> CoreResult<bool> {
        let timestamp = frame_to_timestamp(self.fps, frame);
        self.classifier.classify(self.video, timestamp, self.width, self.height)
    }
}
