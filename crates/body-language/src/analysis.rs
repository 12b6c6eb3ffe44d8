//! Body language result record

use crate::thresholds::*;
use scoring_core::{advise, classify, round3, AnalysisStatus};
use serde::{Deserialize, Serialize};

/// Body language assessment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyAssessment {
    Good,
    Fair,
    Bad,
    UnableToAnalyze,
}

/// Clip-level means of the four weighted body metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetricMeans {
    pub posture: f64,
    pub shoulder_alignment: f64,
    pub head_position: f64,
    pub gestures: f64,
}

impl BodyMetricMeans {
    /// Fixed weighted sum of the metric means
    pub fn overall_score(&self) -> f64 {
        self.posture * POSTURE_WEIGHT
            + self.shoulder_alignment * SHOULDER_WEIGHT
            + self.head_position * HEAD_WEIGHT
            + self.gestures * GESTURE_WEIGHT
    }

    /// One advisory per metric below threshold, or the positive fallback
    pub fn recommendations(&self) -> Vec<String> {
        advise(
            [
                (&POSTURE_ADVICE, self.posture),
                (&SHOULDER_ADVICE, self.shoulder_alignment),
                (&HEAD_ADVICE, self.head_position),
                (&GESTURE_ADVICE, self.gestures),
            ],
            POSITIVE_ADVICE,
        )
    }
}

/// Per-metric breakdown, rounded for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLanguageDetails {
    pub posture_score: f64,
    pub shoulder_alignment_score: f64,
    pub head_position_score: f64,
    pub gesture_score: f64,
    pub detection_confidence: f64,
    pub frames_analyzed: usize,
}

/// Complete body language analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyLanguageReport {
    pub status: AnalysisStatus,
    pub overall_score: f64,
    pub assessment: BodyAssessment,
    pub interpretation: String,
    #[serde(with = "scoring_core::details_map")]
    pub details: Option<BodyLanguageDetails>,
    pub recommendations: Vec<String>,
}

impl BodyLanguageReport {
    /// Build the record for a clip with at least one processed frame
    pub fn from_means(means: BodyMetricMeans, detection_confidence: f64, frames: usize) -> Self {
        let overall = means.overall_score();
        let verdict = classify(overall, &VERDICTS, &VERDICT_FLOOR);

        Self {
            status: AnalysisStatus::Complete,
            overall_score: round3(overall),
            assessment: verdict.assessment,
            interpretation: verdict.interpretation.to_string(),
            details: Some(BodyLanguageDetails {
                posture_score: round3(means.posture),
                shoulder_alignment_score: round3(means.shoulder_alignment),
                head_position_score: round3(means.head_position),
                gesture_score: round3(means.gestures),
                detection_confidence: round3(detection_confidence),
                frames_analyzed: frames,
            }),
            recommendations: means.recommendations(),
        }
    }

    /// Sentinel for a clip where no frame had a detectable body
    pub fn no_body_detected() -> Self {
        Self {
            status: AnalysisStatus::NoBodyDetected,
            overall_score: 0.0,
            assessment: BodyAssessment::UnableToAnalyze,
            interpretation: "Unable to analyze - no body was detected in the recording".to_string(),
            details: None,
            recommendations: vec![
                "Make sure your head, shoulders and hips are visible to the camera".to_string(),
            ],
        }
    }

    pub fn frames_analyzed(&self) -> usize {
        self.details.as_ref().map_or(0, |d| d.frames_analyzed)
    }

    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }
}
