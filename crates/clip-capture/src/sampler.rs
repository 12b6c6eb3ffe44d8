//! Strided frame sampler
//!
//! Pulls decoded frames from a [`ClipSource`], hands every `frame_stride`-th
//! one (1-indexed counter) to the landmark detector and yields the detected
//! sets. Frames the detector rejects are dropped without retry.

use crate::source::{ClipOpener, ClipSource, LandmarkDetector};
use crate::{check_container, ClipError, LandmarkFrame};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default detection stride (every 5th decoded frame)
pub const DEFAULT_FRAME_STRIDE: u64 = 5;

/// Sampler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Detection runs on frames where `counter % frame_stride == 0`
    pub frame_stride: u64,

    /// Accepted container extensions (case-insensitive)
    pub accepted_extensions: Vec<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            frame_stride: DEFAULT_FRAME_STRIDE,
            accepted_extensions: vec!["mp4".to_string()],
        }
    }
}

impl SamplerConfig {
    /// Stride clamped to at least one frame
    pub fn stride(&self) -> u64 {
        self.frame_stride.max(1)
    }
}

/// Lazy iterator over detected landmark sets of one clip
pub struct FrameSampler<C, D> {
    clip: C,
    detector: D,
    stride: u64,
    expected_landmarks: usize,
    frames_read: u64,
    candidates: u64,
    detected: u64,
}

impl<C, D> FrameSampler<C, D>
where
    C: ClipSource,
    D: LandmarkDetector<C::Frame>,
{
    /// Wrap an opened clip. Fails if the clip reports no frames.
    pub fn new(
        clip: C,
        detector: D,
        config: &SamplerConfig,
        expected_landmarks: usize,
    ) -> Result<Self, ClipError> {
        let total = clip.total_frames();
        if total == 0 {
            return Err(ClipError::Unreadable("clip reports zero frames".into()));
        }

        info!(
            "Sampling clip: {} frames, stride {}",
            total,
            config.stride()
        );

        Ok(Self {
            clip,
            detector,
            stride: config.stride(),
            expected_landmarks,
            frames_read: 0,
            candidates: 0,
            detected: 0,
        })
    }

    /// Decoded frames pulled so far
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Frames handed to the detector so far
    pub fn candidates(&self) -> u64 {
        self.candidates
    }

    /// Frames the detector produced landmarks for
    pub fn detected(&self) -> u64 {
        self.detected
    }
}

impl<C, D> Iterator for FrameSampler<C, D>
where
    C: ClipSource,
    D: LandmarkDetector<C::Frame>,
{
    type Item = Result<LandmarkFrame, ClipError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.clip.next_frame()?;
            self.frames_read += 1;

            if self.frames_read % self.stride != 0 {
                continue;
            }

            self.candidates += 1;
            let Some(landmarks) = self.detector.detect(&frame) else {
                debug!("No landmarks on frame {}", self.frames_read);
                continue;
            };

            if landmarks.len() < self.expected_landmarks {
                return Some(Err(ClipError::IncompleteLandmarks {
                    expected: self.expected_landmarks,
                    actual: landmarks.len(),
                }));
            }

            self.detected += 1;
            return Some(Ok(landmarks));
        }
    }
}

/// Check the container, open the clip and wrap it in a sampler.
///
/// `UnsupportedFormat` is reported before the opener is touched.
pub fn open_sampled<O, D>(
    path: &Path,
    opener: &O,
    detector: D,
    config: &SamplerConfig,
    expected_landmarks: usize,
) -> Result<FrameSampler<O::Clip, D>, ClipError>
where
    O: ClipOpener,
    D: LandmarkDetector<<O::Clip as ClipSource>::Frame>,
{
    check_container(path, &config.accepted_extensions)?;
    let clip = opener.open(path)?;
    FrameSampler::new(clip, detector, config, expected_landmarks)
}
