//! Backward search for the first outro frame.
//!
//! The outro is a contiguous suffix of the video. Starting past the last
//! frame, the search steps backward by `jump` frames while it keeps landing
//! in the outro. When a step lands on content, the jump is halved and the
//! step retried from the same position. Once a one-frame step lands on
//! content, the current position is the first outro frame.
//!
//! Each classification is an external decode, so the search needs
//! O(log frame_count) of them where a linear scan would need O(frame_count).

use crate::error::{CoreError, CoreResult};
use crate::processing::classifier::FrameClassifier;
use crate::processing::timing::FrameIndex;
use log::{debug, trace};
use std::collections::HashMap;

/// Position and step size of a running search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    /// Earliest frame known to be in the outro, or `frame_count` before any is found.
    pub target_frame: FrameIndex,
    /// Current backward step, always at least 1.
    pub jump_amount: u64,
}

/// Outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// First frame of the outro.
    pub boundary: FrameIndex,
    /// Classifier calls actually made (repeat probes are served from memory).
    pub classifications: u64,
    /// Distinct jump sizes used, including the initial one.
    pub rounds: u32,
}

/// Finds the first outro frame of a video with `frame_count` frames.
///
/// Probes that would fall before frame 0 are treated as content without
/// consulting the classifier. A video whose every frame is outro therefore
/// yields boundary 0.
///
/// # Errors
///
/// * `CoreError::NoOutroDetected` - The last frame is already content
/// * `CoreError::Config` - `initial_jump` is zero
/// * `CoreError::InvalidMedia` - `frame_count` is zero
/// * Any error returned by the classifier
pub fn find_outro_start<C>(classifier: &mut C, frame_count: u64, initial_jump: u64) -> CoreResult<SearchReport>
where
    C: FrameClassifier + ?Sized,
{
    if initial_jump == 0 {
        return Err(CoreError::Config("initial jump must be at least 1 frame".to_string()));
    }
    if frame_count == 0 {
        return Err(CoreError::InvalidMedia("video stream has no frames".to_string()));
    }

    let mut state = SearchState {
        target_frame: frame_count,
        jump_amount: initial_jump,
    };
    let mut seen: HashMap<FrameIndex, bool> = HashMap::new();
    let mut classifications = 0u64;
    let mut rounds = 1u32;

    loop {
        let is_outro = match state.target_frame.checked_sub(state.jump_amount) {
            Some(frame) => match seen.get(&frame) {
                Some(&known) => known,
                None => {
                    let verdict = classifier.is_outro_frame(frame)?;
                    classifications += 1;
                    seen.insert(frame, verdict);
                    trace!("Frame {frame}: {}", if verdict { "outro" } else { "content" });
                    verdict
                }
            },
            None => {
                trace!(
                    "Step of {} from frame {} passes frame 0, treating as content",
                    state.jump_amount, state.target_frame
                );
                false
            }
        };

        if is_outro {
            state.target_frame -= state.jump_amount;
            continue;
        }

        if state.jump_amount == 1 {
            if state.target_frame == frame_count {
                debug!("No outro frame found after {classifications} classifications");
                return Err(CoreError::NoOutroDetected);
            }
            debug!(
                "Outro starts at frame {} ({classifications} classifications, {rounds} rounds)",
                state.target_frame
            );
            return Ok(SearchReport {
                boundary: state.target_frame,
                classifications,
                rounds,
            });
        }

        state.jump_amount /= 2;
        rounds += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_oracle(start: FrameIndex) -> impl FnMut(FrameIndex) -> CoreResult<bool> {
        move |frame| Ok(frame >= start)
    }

    #[test]
    fn test_finds_boundary_600_550() {
        let mut probed = Vec::new();
        let mut oracle = |frame: FrameIndex| {
            probed.push(frame);
            Ok(frame >= 550)
        };
        let report = find_outro_start(&mut oracle, 600, 60).unwrap();

        assert_eq!(report.boundary, 550);
        assert!(report.rounds <= 7, "rounds = {}", report.rounds);
        assert_eq!(report.classifications, 8);
        assert_eq!(probed, vec![540, 570, 555, 548, 552, 549, 551, 550]);
    }

    #[test]
    fn test_no_outro_is_not_found() {
        let mut oracle = |_frame: FrameIndex| Ok(false);
        let err = find_outro_start(&mut oracle, 600, 60).unwrap_err();
        assert!(matches!(err, CoreError::NoOutroDetected));
    }

    #[test]
    fn test_all_outro_clamps_to_zero() {
        let mut oracle = suffix_oracle(0);
        let report = find_outro_start(&mut oracle, 600, 60).unwrap();
        assert_eq!(report.boundary, 0);
    }

    #[test]
    fn test_video_shorter_than_initial_jump() {
        let mut oracle = suffix_oracle(12);
        let report = find_outro_start(&mut oracle, 40, 60).unwrap();
        assert_eq!(report.boundary, 12);
    }

    #[test]
    fn test_single_frame_video() {
        let mut oracle = suffix_oracle(0);
        assert_eq!(find_outro_start(&mut oracle, 1, 60).unwrap().boundary, 0);

        let mut oracle = suffix_oracle(1);
        assert!(matches!(
            find_outro_start(&mut oracle, 1, 60),
            Err(CoreError::NoOutroDetected)
        ));
    }

    #[test]
    fn test_rejects_degenerate_arguments() {
        let mut oracle = suffix_oracle(0);
        assert!(matches!(find_outro_start(&mut oracle, 600, 0), Err(CoreError::Config(_))));
        assert!(matches!(find_outro_start(&mut oracle, 0, 60), Err(CoreError::InvalidMedia(_))));
    }

    #[test]
    fn test_classifier_error_aborts() {
        let mut oracle = |frame: FrameIndex| {
            if frame < 560 {
                Err(CoreError::SampleDecode("truncated".into()))
            } else {
                Ok(true)
            }
        };
        let err = find_outro_start(&mut oracle, 600, 60).unwrap_err();
        assert!(matches!(err, CoreError::SampleDecode(_)));
    }
}
