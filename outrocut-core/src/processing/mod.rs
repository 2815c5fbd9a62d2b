//! Outro detection and removal.
//!
//! The submodules build on each other bottom-up: `timing` and `color` hold
//! the numeric helpers, `classifier` decides a single frame, `boundary_search`
//! finds the first outro frame, and `outro` orchestrates probe, search and trim.

/// Backward exponential-backoff search for the first outro frame
pub mod boundary_search;

/// Corner sampling classifier for single frames
pub mod classifier;

/// RGB colors and the outro background predicate
pub mod color;

/// Detection and trimming orchestration
pub mod outro;

/// Frame index and timestamp conversion
pub mod timing;

/// Stream properties reported by the media probe
pub mod video_properties;

pub use boundary_search::{SearchReport, SearchState, find_outro_start};
pub use classifier::{FrameClassifier, OutroClassifier, VideoFrameClassifier, corner_samples};
pub use color::{Color, is_outro_color};
pub use outro::{FfmpegOutroRemover, OutroDetection, OutroRemover, TrimReport, remove_outro};
pub use timing::{FrameIndex, Timestamp};
pub use video_properties::VideoProperties;
