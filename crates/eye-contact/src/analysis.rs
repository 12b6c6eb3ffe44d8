//! Eye contact result record

use crate::thresholds::*;
use scoring_core::{advise, classify, round3, AnalysisStatus};
use serde::{Deserialize, Serialize};

/// Eye contact assessment band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EyeAssessment {
    Excellent,
    Good,
    Fair,
    Poor,
    UnableToAnalyze,
}

/// Clip-level means of the eye series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeMetricMeans {
    pub eye_contact: f64,
    pub eye_opening: f64,
    /// Mean of the per-frame combined scores; this is the overall score
    pub combined: f64,
}

impl EyeMetricMeans {
    pub fn recommendations(&self) -> Vec<String> {
        advise(
            [
                (&CONTACT_ADVICE, self.eye_contact),
                (&OPENING_ADVICE, self.eye_opening),
            ],
            POSITIVE_ADVICE,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeContactDetails {
    pub eye_contact_score: f64,
    pub eye_opening_score: f64,
    pub frames_analyzed: usize,
}

/// Complete eye contact analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeContactReport {
    pub status: AnalysisStatus,
    pub overall_score: f64,
    pub assessment: EyeAssessment,
    pub interpretation: String,
    #[serde(with = "scoring_core::details_map")]
    pub details: Option<EyeContactDetails>,
    pub recommendations: Vec<String>,
}

impl EyeContactReport {
    pub fn from_means(means: EyeMetricMeans, frames: usize) -> Self {
        let verdict = classify(means.combined, &VERDICTS, &VERDICT_FLOOR);

        Self {
            status: AnalysisStatus::Complete,
            overall_score: round3(means.combined),
            assessment: verdict.assessment,
            interpretation: verdict.interpretation.to_string(),
            details: Some(EyeContactDetails {
                eye_contact_score: round3(means.eye_contact),
                eye_opening_score: round3(means.eye_opening),
                frames_analyzed: frames,
            }),
            recommendations: means.recommendations(),
        }
    }

    /// Sentinel for a clip where no frame had a detectable face
    pub fn no_face_detected() -> Self {
        Self {
            status: AnalysisStatus::NoFaceDetected,
            overall_score: 0.0,
            assessment: EyeAssessment::UnableToAnalyze,
            interpretation: "Unable to analyze - no face was detected in the recording".to_string(),
            details: None,
            recommendations: vec!["Make sure your face is clearly visible to the camera".to_string()],
        }
    }

    pub fn frames_analyzed(&self) -> usize {
        self.details.as_ref().map_or(0, |d| d.frames_analyzed)
    }

    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn means(eye_contact: f64, eye_opening: f64) -> EyeMetricMeans {
        EyeMetricMeans {
            eye_contact,
            eye_opening,
            combined: eye_contact * 0.6 + eye_opening * 0.4,
        }
    }

    #[test]
    fn test_verdict_bands() {
        let cases = [
            (means(1.0, 1.0), EyeAssessment::Excellent),
            (means(0.7, 0.5), EyeAssessment::Good),
            (means(0.4, 0.5), EyeAssessment::Fair),
            (means(0.1, 0.3), EyeAssessment::Poor),
        ];
        for (m, expected) in cases {
            assert_eq!(EyeContactReport::from_means(m, 3).assessment, expected);
        }
    }

    #[test]
    fn test_recommendations() {
        assert_eq!(
            means(0.4, 0.5).recommendations(),
            vec![
                "Improve eye contact - maintain focus on the camera",
                "Adjust eye opening - keep eyes naturally open, not too closed or wide",
            ]
        );
        assert_eq!(
            means(0.7, 1.0).recommendations(),
            vec!["Maintain your excellent eye contact!"]
        );
    }

    #[test]
    fn test_sentinel_serialization() {
        let json = serde_json::to_value(EyeContactReport::no_face_detected()).unwrap();
        assert_eq!(json["status"], "No face detected");
        assert_eq!(json["assessment"], "UNABLE_TO_ANALYZE");
        assert_eq!(json["overall_score"], 0.0);
        assert_eq!(json["details"], serde_json::json!({}));
    }

    #[test]
    fn test_details_shape() {
        let json = serde_json::to_value(EyeContactReport::from_means(means(0.85, 0.9126), 9)).unwrap();
        assert_eq!(json["assessment"], "EXCELLENT");
        assert_eq!(json["details"]["eye_contact_score"], 0.85);
        assert_eq!(json["details"]["eye_opening_score"], 0.913);
        assert_eq!(json["details"]["frames_analyzed"], 9);
        assert_eq!(json["details"].as_object().unwrap().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_recommendations_never_empty(c in 0.0f64..=1.0, o in 0.0f64..=1.0) {
            prop_assert!(!means(c, o).recommendations().is_empty());
        }
    }
}
