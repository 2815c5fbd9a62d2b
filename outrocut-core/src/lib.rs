//! Core library for detecting and removing the branded outro of short-form videos.
//!
//! A video's outro is a run of frames at the end whose corners all show the
//! same dark background color. The library locates the first of those frames
//! with a backward exponential-backoff search, sampling only the frame corners
//! through ffmpeg, and then stream-copies everything before it into a new file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use outrocut_core::config::CoreConfigBuilder;
//! use outrocut_core::{FfmpegOutroRemover, external::check_dependencies};
//! use std::path::Path;
//!
//! let config = CoreConfigBuilder::new()
//!     .outro_frame_padding(8)
//!     .build();
//! check_dependencies(&config).unwrap();
//!
//! let remover = FfmpegOutroRemover::from_config(config).unwrap();
//! let report = remover
//!     .remove_outro(Path::new("clip.mp4"), Path::new("clip_trimmed.mp4"))
//!     .unwrap();
//! println!("kept {} frames", report.detection.end_frame);
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{MediaProber, PixelSampler, Trimmer, check_dependencies};
pub use processing::{
    Color, FfmpegOutroRemover, FrameIndex, OutroDetection, OutroRemover, SearchReport, Timestamp,
    TrimReport, VideoProperties, find_outro_start, remove_outro,
};
pub use utils::{format_bytes, format_duration};
