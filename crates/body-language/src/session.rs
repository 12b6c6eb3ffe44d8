//! Per-call accumulation of body metric scores

use crate::analysis::{BodyLanguageReport, BodyMetricMeans};
use crate::metrics::{evaluate_frame, BodyFrameScores};
use crate::BodyLanguageError;
use clip_capture::LandmarkFrame;
use scoring_core::MetricSeries;

/// Series owned by one `analyze` call; every processed frame feeds all five
#[derive(Debug, Default)]
pub struct BodySession {
    posture: MetricSeries,
    shoulder_alignment: MetricSeries,
    head_position: MetricSeries,
    gestures: MetricSeries,
    detection_confidence: MetricSeries,
    frames: usize,
}

impl BodySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one detected frame and append to every series
    pub fn record(&mut self, frame: &LandmarkFrame) -> Result<BodyFrameScores, BodyLanguageError> {
        let scores = evaluate_frame(frame)?;
        self.posture.push(scores.posture);
        self.shoulder_alignment.push(scores.shoulder_alignment);
        self.head_position.push(scores.head_position);
        self.gestures.push(scores.gestures);
        self.detection_confidence.push(scores.detection_confidence);
        self.frames += 1;
        Ok(scores)
    }

    pub fn frames_processed(&self) -> usize {
        self.frames
    }

    /// Reduce the series to means, or `None` before any frame was processed
    pub fn means(&self) -> Option<BodyMetricMeans> {
        Some(BodyMetricMeans {
            posture: self.posture.mean()?,
            shoulder_alignment: self.shoulder_alignment.mean()?,
            head_position: self.head_position.mean()?,
            gestures: self.gestures.mean()?,
        })
    }

    /// Consume the session into its result record
    pub fn finish(self) -> BodyLanguageReport {
        match (self.means(), self.detection_confidence.mean()) {
            (Some(means), Some(confidence)) => {
                BodyLanguageReport::from_means(means, confidence, self.frames)
            }
            _ => BodyLanguageReport::no_body_detected(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::upright_frame;
    use crate::BodyAssessment;

    #[test]
    fn test_series_track_frame_count() {
        let mut session = BodySession::new();
        for _ in 0..4 {
            session.record(&upright_frame()).unwrap();
        }
        assert_eq!(session.frames_processed(), 4);
        for series in [
            &session.posture,
            &session.shoulder_alignment,
            &session.head_position,
            &session.gestures,
            &session.detection_confidence,
        ] {
            assert_eq!(series.len(), 4);
        }
    }

    #[test]
    fn test_empty_session_is_sentinel() {
        let session = BodySession::new();
        assert!(session.means().is_none());
        let report = session.finish();
        assert_eq!(report.assessment, BodyAssessment::UnableToAnalyze);
        assert_eq!(report.overall_score, 0.0);
        assert!(report.details.is_none());
    }

    #[test]
    fn test_means_average_frames() {
        let mut session = BodySession::new();
        session.record(&upright_frame()).unwrap();

        let mut dropped_head = upright_frame();
        let mut nose = *dropped_head.get(0).unwrap();
        nose.y = 0.45;
        dropped_head.set(0, nose);
        session.record(&dropped_head).unwrap();

        let means = session.means().unwrap();
        assert!((means.head_position - 0.85).abs() < 1e-12);
        assert_eq!(means.shoulder_alignment, 1.0);
    }
}
