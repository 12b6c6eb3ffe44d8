//! Eye Contact Scoring
//!
//! Scores gaze and eyelid opening from FaceMesh landmarks. Each sampled frame
//! gets an eye contact score (inner eye corners against frame center) and an
//! eye opening score (eyelid gap); their 0.6/0.4 blend averaged over the clip
//! is the overall score.

pub mod analysis;
pub mod config;
pub mod landmarks;
pub mod metrics;
pub mod session;
pub mod thresholds;

pub use analysis::{EyeAssessment, EyeContactDetails, EyeContactReport, EyeMetricMeans};
pub use config::EyeContactConfig;
pub use landmarks::{FaceKeypoints, FaceLandmark, FACE_LANDMARK_COUNT};
pub use metrics::{evaluate_frame, EyeFrameScores};
pub use session::EyeSession;

use clip_capture::{open_sampled, ClipError, ClipOpener, ClipSource, FrameSampler, LandmarkDetector};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Eye contact error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EyeContactError {
    #[error(transparent)]
    Clip(#[from] ClipError),

    #[error("Landmark {0:?} missing from face mesh")]
    LandmarksMissing(FaceLandmark),
}

/// Eye contact analyzer
#[derive(Debug, Clone, Default)]
pub struct EyeContactAnalyzer {
    config: EyeContactConfig,
}

impl EyeContactAnalyzer {
    pub fn new(config: EyeContactConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EyeContactConfig {
        &self.config
    }

    /// Score an already opened clip
    pub fn analyze<C, D>(&self, clip: C, detector: D) -> Result<EyeContactReport, EyeContactError>
    where
        C: ClipSource,
        D: LandmarkDetector<C::Frame>,
    {
        let sampler = FrameSampler::new(clip, detector, &self.config.sampler, FACE_LANDMARK_COUNT)?;
        self.score(sampler)
    }

    /// Check the container, open the clip at `path` and score it
    pub fn analyze_path<O, D>(
        &self,
        path: &Path,
        opener: &O,
        detector: D,
    ) -> Result<EyeContactReport, EyeContactError>
    where
        O: ClipOpener,
        D: LandmarkDetector<<O::Clip as ClipSource>::Frame>,
    {
        info!("Analyzing eye contact: {}", path.display());
        let sampler = open_sampled(path, opener, detector, &self.config.sampler, FACE_LANDMARK_COUNT)?;
        self.score(sampler)
    }

    fn score<C, D>(&self, mut sampler: FrameSampler<C, D>) -> Result<EyeContactReport, EyeContactError>
    where
        C: ClipSource,
        D: LandmarkDetector<C::Frame>,
    {
        let mut session = EyeSession::new();

        for landmarks in sampler.by_ref() {
            let scores = session.record(&landmarks?)?;
            debug!(
                "Frame scores: contact {:.2}, opening {:.2}",
                scores.eye_contact, scores.eye_opening
            );
        }

        let report = session.finish();
        if report.is_complete() {
            info!(
                "Eye contact: {:?} ({:.3}) over {} frames",
                report.assessment,
                report.overall_score,
                report.frames_analyzed()
            );
        } else {
            warn!("No face detected in {} candidate frames", sampler.candidates());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{centered_face, face_with};
    use clip_capture::{LandmarkFrame, LandmarkPoint, LandmarkTrack, PassthroughDetector};

    #[test]
    fn test_centered_clip_is_excellent() {
        let report = EyeContactAnalyzer::default()
            .analyze(LandmarkTrack::repeat(centered_face(), 20), PassthroughDetector)
            .unwrap();
        assert_eq!(report.assessment, EyeAssessment::Excellent);
        assert_eq!(report.overall_score, 1.0);
        assert_eq!(report.frames_analyzed(), 4);
        assert_eq!(report.recommendations, vec!["Maintain your excellent eye contact!"]);
    }

    #[test]
    fn test_looking_away_is_poor() {
        let report = EyeContactAnalyzer::default()
            .analyze(LandmarkTrack::repeat(face_with(0.9, 0.2), 10), PassthroughDetector)
            .unwrap();
        assert_eq!(report.assessment, EyeAssessment::Poor);
        assert_eq!(report.recommendations.len(), 2);
    }

    #[test]
    fn test_undetected_clip_is_sentinel() {
        let report = EyeContactAnalyzer::default()
            .analyze(LandmarkTrack::new(vec![None; 15]), PassthroughDetector)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "No face detected");
        assert_eq!(json["details"], serde_json::json!({}));
    }

    #[test]
    fn test_body_sized_frame_is_incomplete() {
        let body = LandmarkFrame::new(vec![LandmarkPoint::at(0.5, 0.5); 33]);
        let err = EyeContactAnalyzer::default()
            .analyze(LandmarkTrack::repeat(body, 5), PassthroughDetector)
            .unwrap_err();
        assert_eq!(
            err,
            EyeContactError::Clip(ClipError::IncompleteLandmarks {
                expected: FACE_LANDMARK_COUNT,
                actual: 33
            })
        );
    }

    #[test]
    fn test_closure_detector() {
        // Raw frame numbers stand in for decoded images
        struct Numbers(std::ops::Range<u64>);

        impl ClipSource for Numbers {
            type Frame = u64;

            fn total_frames(&self) -> u64 {
                self.0.end - self.0.start
            }

            fn next_frame(&mut self) -> Option<u64> {
                self.0.next()
            }
        }

        let detector = |n: &u64| -> Option<LandmarkFrame> {
            (*n % 2 == 0).then(centered_face)
        };
        let report = EyeContactAnalyzer::new(EyeContactConfig::with_stride(1))
            .analyze(Numbers(0..10), detector)
            .unwrap();
        assert_eq!(report.frames_analyzed(), 5);
    }
}
