//! Body Language Scoring
//!
//! Scores a recorded answer's nonverbal delivery from BlazePose landmarks:
//! - Posture (lean, forward head, slouch)
//! - Shoulder alignment
//! - Head position
//! - Hand gestures
//!
//! Frames are sampled at a fixed stride, scored independently, averaged over
//! the clip and reduced to a weighted overall score with a GOOD/FAIR/BAD verdict.

pub mod analysis;
pub mod config;
pub mod landmarks;
pub mod metrics;
pub mod session;
pub mod thresholds;

pub use analysis::{BodyAssessment, BodyLanguageDetails, BodyLanguageReport, BodyMetricMeans};
pub use config::BodyLanguageConfig;
pub use landmarks::{BodyKeypoints, BodyLandmark, BODY_LANDMARK_COUNT};
pub use metrics::{evaluate_frame, BodyFrameScores};
pub use session::BodySession;

use clip_capture::{open_sampled, ClipError, ClipOpener, ClipSource, FrameSampler, LandmarkDetector};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Body language error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyLanguageError {
    #[error(transparent)]
    Clip(#[from] ClipError),

    #[error("Landmark {0:?} missing from frame")]
    LandmarksMissing(BodyLandmark),
}

/// Body language analyzer
///
/// Holds configuration only; every call scores into a fresh [`BodySession`],
/// so one analyzer can serve independent clips concurrently.
#[derive(Debug, Clone, Default)]
pub struct BodyLanguageAnalyzer {
    config: BodyLanguageConfig,
}

impl BodyLanguageAnalyzer {
    pub fn new(config: BodyLanguageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BodyLanguageConfig {
        &self.config
    }

    /// Score an already opened clip
    pub fn analyze<C, D>(&self, clip: C, detector: D) -> Result<BodyLanguageReport, BodyLanguageError>
    where
        C: ClipSource,
        D: LandmarkDetector<C::Frame>,
    {
        let sampler = FrameSampler::new(clip, detector, &self.config.sampler, BODY_LANDMARK_COUNT)?;
        self.score(sampler)
    }

    /// Check the container, open the clip at `path` and score it
    pub fn analyze_path<O, D>(
        &self,
        path: &Path,
        opener: &O,
        detector: D,
    ) -> Result<BodyLanguageReport, BodyLanguageError>
    where
        O: ClipOpener,
        D: LandmarkDetector<<O::Clip as ClipSource>::Frame>,
    {
        info!("Analyzing body language: {}", path.display());
        let sampler = open_sampled(path, opener, detector, &self.config.sampler, BODY_LANDMARK_COUNT)?;
        self.score(sampler)
    }

    fn score<C, D>(&self, mut sampler: FrameSampler<C, D>) -> Result<BodyLanguageReport, BodyLanguageError>
    where
        C: ClipSource,
        D: LandmarkDetector<C::Frame>,
    {
        let mut session = BodySession::new();

        for landmarks in sampler.by_ref() {
            let scores = session.record(&landmarks?)?;
            debug!(
                "Frame scores: posture {:.3}, shoulders {:.3}, head {:.3}, gestures {:.3}",
                scores.posture, scores.shoulder_alignment, scores.head_position, scores.gestures
            );
        }

        let report = session.finish();
        if report.is_complete() {
            info!(
                "Body language: {:?} ({:.3}) over {} of {} frames",
                report.assessment,
                report.overall_score,
                report.frames_analyzed(),
                sampler.frames_read()
            );
        } else {
            warn!(
                "No body detected in {} candidate frames",
                sampler.candidates()
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::upright_frame;
    use clip_capture::{LandmarkFrame, LandmarkPoint, LandmarkTrack, PassthroughDetector};

    struct TrackOpener(LandmarkTrack);

    impl ClipOpener for TrackOpener {
        type Clip = LandmarkTrack;

        fn open(&self, _path: &Path) -> Result<LandmarkTrack, ClipError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_upright_clip_scores_good() {
        let analyzer = BodyLanguageAnalyzer::default();
        let report = analyzer
            .analyze(LandmarkTrack::repeat(upright_frame(), 25), PassthroughDetector)
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(report.assessment, BodyAssessment::Good);
        // posture, shoulders, head 1.0; gestures 0.88
        assert_eq!(report.overall_score, 0.97);
        assert_eq!(report.frames_analyzed(), 5);
        assert_eq!(
            report.recommendations,
            vec!["Continue maintaining your excellent body language!"]
        );
    }

    #[test]
    fn test_undetected_clip_is_sentinel() {
        let analyzer = BodyLanguageAnalyzer::default();
        let report = analyzer
            .analyze(LandmarkTrack::new(vec![None; 40]), PassthroughDetector)
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "No body detected");
        assert_eq!(json["assessment"], "UNABLE_TO_ANALYZE");
        assert_eq!(json["overall_score"], 0.0);
        assert_eq!(json["details"], serde_json::json!({}));
    }

    #[test]
    fn test_only_strided_frames_count() {
        // Frames 5 and 10 are sampled; frame 5 has no body
        let mut frames = vec![Some(upright_frame()); 12];
        frames[4] = None;
        let analyzer = BodyLanguageAnalyzer::default();
        let report = analyzer
            .analyze(LandmarkTrack::new(frames), PassthroughDetector)
            .unwrap();
        assert_eq!(report.frames_analyzed(), 1);

        let every = BodyLanguageAnalyzer::new(BodyLanguageConfig::with_stride(1));
        let report = every
            .analyze(LandmarkTrack::repeat(upright_frame(), 12), PassthroughDetector)
            .unwrap();
        assert_eq!(report.frames_analyzed(), 12);
    }

    #[test]
    fn test_empty_clip_is_unreadable() {
        let err = BodyLanguageAnalyzer::default()
            .analyze(LandmarkTrack::new(vec![]), PassthroughDetector)
            .unwrap_err();
        assert!(matches!(err, BodyLanguageError::Clip(ClipError::Unreadable(_))));
    }

    #[test]
    fn test_incomplete_landmarks_are_fatal() {
        let short = LandmarkFrame::new(vec![LandmarkPoint::at(0.5, 0.5); 20]);
        let err = BodyLanguageAnalyzer::default()
            .analyze(LandmarkTrack::repeat(short, 10), PassthroughDetector)
            .unwrap_err();
        assert_eq!(
            err,
            BodyLanguageError::Clip(ClipError::IncompleteLandmarks {
                expected: 33,
                actual: 20
            })
        );
    }

    #[test]
    fn test_path_format_checked() {
        let analyzer = BodyLanguageAnalyzer::default();
        let opener = TrackOpener(LandmarkTrack::repeat(upright_frame(), 10));

        let err = analyzer
            .analyze_path(Path::new("answer.mov"), &opener, PassthroughDetector)
            .unwrap_err();
        assert!(matches!(
            err,
            BodyLanguageError::Clip(ClipError::UnsupportedFormat { .. })
        ));

        let report = analyzer
            .analyze_path(Path::new("answer.MP4"), &opener, PassthroughDetector)
            .unwrap();
        assert_eq!(report.frames_analyzed(), 2);
    }
}
