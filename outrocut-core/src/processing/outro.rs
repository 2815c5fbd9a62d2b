// ============================================================================
// outrocut-core/src/processing/outro.rs
// ============================================================================
//
// OUTRO REMOVAL: Detection and Trimming Orchestration
//
// This module ties the pieces of the library together. It probes the input,
// runs the backward boundary search over corner-sampled frames, backs the
// boundary off by the configured padding and hands the resulting timestamp
// to the trimmer.
//
// KEY COMPONENTS:
// - OutroRemover: generic orchestrator over MediaProber, PixelSampler, Trimmer
// - FfmpegOutroRemover: the orchestrator wired to ffprobe/ffmpeg
// - remove_outro: one-call convenience entry point
//
// WORKFLOW:
// 1. Validate the input path (and, when trimming, the output path)
// 2. Probe duration, frame count and dimensions; derive the frame rate
// 3. Search backward for the first outro frame
// 4. Subtract the padding and convert the end frame to a timestamp
// 5. Stream-copy everything before that timestamp into the output

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{
    FfmpegPixelSampler, FfmpegTrimmer, FfprobeProber, MediaProber, PixelSampler, Trimmer,
    check_dependencies,
};
use crate::processing::boundary_search::{SearchReport, find_outro_start};
use crate::processing::classifier::{OutroClassifier, VideoFrameClassifier};
use crate::processing::timing::{FrameIndex, Timestamp, frame_to_timestamp};
use crate::processing::video_properties::VideoProperties;
use crate::utils::format_duration;

// ---- External crate imports ----
use log::{debug, info};

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Where the outro starts and where the trimmed video should end.
#[derive(Debug, Clone, PartialEq)]
pub struct OutroDetection {
    pub properties: VideoProperties,
    pub fps: f64,
    pub search: SearchReport,
    /// Exclusive end of the kept range: the boundary minus the padding.
    pub end_frame: FrameIndex,
    pub end_timestamp: Timestamp,
}

impl OutroDetection {
    /// First frame of the outro.
    #[must_use]
    pub fn boundary(&self) -> FrameIndex {
        self.search.boundary
    }
}

/// Result of a full detect-and-trim run.
#[derive(Debug, Clone)]
pub struct TrimReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub detection: OutroDetection,
    pub elapsed: Duration,
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

/// Detects and removes the outro of a video using the given collaborators.
///
/// The orchestrator is generic over its three collaborators so tests can
/// substitute deterministic fakes for ffprobe and ffmpeg:
/// - `P`: MediaProber - duration, frame count and dimensions
/// - `S`: PixelSampler - single pixel colors at a timestamp
/// - `T`: Trimmer - stream-copy of the kept prefix
pub struct OutroRemover<P, S, T> {
    config: CoreConfig,
    prober: P,
    classifier: OutroClassifier<S>,
    trimmer: T,
}

impl<P, S, T> OutroRemover<P, S, T>
where
    P: MediaProber,
    S: PixelSampler,
    T: Trimmer,
{
    /// Creates an orchestrator, rejecting an invalid configuration up front.
    pub fn new(config: CoreConfig, prober: P, sampler: S, trimmer: T) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            prober,
            classifier: OutroClassifier::new(sampler),
            trimmer,
        })
    }

    /// Probes `input` and locates its outro without writing anything.
    ///
    /// # Errors
    ///
    /// * `CoreError::PathError` - `input` is not an existing file
    /// * `CoreError::NoOutroDetected` - The video does not end in an outro
    /// * `CoreError::NoContentBeforeOutro` - Nothing is left once the padding is removed
    /// * Any probe or sampling error
    pub fn detect(&self, input: &Path) -> CoreResult<OutroDetection> {
        ensure_input_file(input)?;

        let properties = self.prober.probe(input)?;
        properties.validate()?;
        let fps = properties.fps()?;
        info!(
            "{}: {} frames, {}x{}, {} ({fps:.3} fps)",
            input.display(),
            properties.frame_count,
            properties.width,
            properties.height,
            format_duration(properties.duration_secs)
        );

        let mut frames = VideoFrameClassifier::new(&self.classifier, input, &properties, fps);
        let search = find_outro_start(&mut frames, properties.frame_count, self.config.initial_jump)?;

        let padding = self.config.outro_frame_padding;
        let end_frame = match search.boundary.checked_sub(padding) {
            Some(frame) if frame > 0 => frame,
            _ => {
                return Err(CoreError::NoContentBeforeOutro {
                    boundary: search.boundary,
                    padding,
                });
            }
        };
        let end_timestamp = frame_to_timestamp(fps, end_frame);
        info!(
            "Outro starts at frame {} of {}; keeping frames [0, {end_frame}) up to {end_timestamp}",
            search.boundary, properties.frame_count
        );

        Ok(OutroDetection {
            properties,
            fps,
            search,
            end_frame,
            end_timestamp,
        })
    }

    /// Detects the outro of `input` and writes everything before it to `output`.
    ///
    /// The parent directory of `output` is created when missing. An existing
    /// `output` is overwritten, unless it is the input itself.
    pub fn remove_outro(&self, input: &Path, output: &Path) -> CoreResult<TrimReport> {
        let start = Instant::now();
        ensure_distinct_paths(input, output)?;

        let detection = self.detect(input)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        self.trimmer.trim(input, output, detection.end_timestamp)?;

        let elapsed = start.elapsed();
        debug!("Outro removal finished in {:.2?}", elapsed);
        Ok(TrimReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            detection,
            elapsed,
        })
    }
}

/// [`OutroRemover`] backed by the ffprobe and ffmpeg binaries.
pub type FfmpegOutroRemover = OutroRemover<FfprobeProber, FfmpegPixelSampler, FfmpegTrimmer>;

impl OutroRemover<FfprobeProber, FfmpegPixelSampler, FfmpegTrimmer> {
    /// Wires the ffprobe/ffmpeg collaborators from `config`.
    pub fn from_config(config: CoreConfig) -> CoreResult<Self> {
        let prober = FfprobeProber::from_config(&config);
        let sampler = FfmpegPixelSampler::from_config(&config);
        let trimmer = FfmpegTrimmer::from_config(&config);
        Self::new(config, prober, sampler, trimmer)
    }
}

/// Removes the outro of `input` with ffmpeg, writing the result to `output`.
///
/// Checks that ffprobe and ffmpeg can be started before touching the input.
///
/// # Examples
///
/// ```rust,no_run
/// use outrocut_core::{CoreConfig, remove_outro};
/// use std::path::Path;
///
/// let report = remove_outro(&CoreConfig::default(), Path::new("clip.mp4"), Path::new("output.mp4")).unwrap();
/// println!("outro started at frame {}", report.detection.boundary());
/// ```
pub fn remove_outro(config: &CoreConfig, input: &Path, output: &Path) -> CoreResult<TrimReport> {
    check_dependencies(config)?;
    FfmpegOutroRemover::from_config(config.clone())?.remove_outro(input, output)
}

// ============================================================================
// PATH CHECKS
// ============================================================================

fn ensure_input_file(input: &Path) -> CoreResult<()> {
    if input.is_file() {
        Ok(())
    } else {
        Err(CoreError::PathError(format!(
            "Input file not found: {}",
            input.display()
        )))
    }
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> CoreResult<()> {
    // A missing output cannot alias an existing input.
    if !output.exists() {
        return Ok(());
    }
    let same = match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        return Err(CoreError::PathError(format!(
            "Output path is the same as the input: {}",
            output.display()
        )));
    }
    Ok(())
}
