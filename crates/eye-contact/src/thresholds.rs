//! Fixed scoring constants for the eye metrics

use crate::analysis::EyeAssessment;
use scoring_core::{AdvisoryRule, Step, StepTable, Verdict};

/// Normalized x of the frame center, where a camera-facing gaze lands
pub const FRAME_CENTER_X: f64 = 0.5;

/// Score by horizontal deviation of the inner eye corners from frame center
pub const EYE_CONTACT: StepTable = StepTable {
    steps: &[Step::new(0.05, 1.0), Step::new(0.15, 0.7), Step::new(0.25, 0.4)],
    otherwise: 0.1,
};

/// Score by mean vertical eyelid gap; 0.035..0.065 is a natural opening
pub const EYE_OPENING: StepTable = StepTable {
    steps: &[
        Step::new(0.015, 0.1),
        Step::new(0.025, 0.5),
        Step::new(0.035, 0.75),
        Step::new(0.065, 1.0),
        Step::new(0.10, 0.7),
    ],
    otherwise: 0.3,
};

pub const CONTACT_WEIGHT: f64 = 0.6;
pub const OPENING_WEIGHT: f64 = 0.4;

pub const VERDICTS: [Verdict<EyeAssessment>; 3] = [
    Verdict {
        min_score: 0.75,
        assessment: EyeAssessment::Excellent,
        interpretation: "Excellent eye contact - strong direct gaze and natural eye opening",
    },
    Verdict {
        min_score: 0.60,
        assessment: EyeAssessment::Good,
        interpretation: "Good eye contact - mostly looking at camera with natural eye expression",
    },
    Verdict {
        min_score: 0.40,
        assessment: EyeAssessment::Fair,
        interpretation: "Fair eye contact - occasional looking away or unnatural eye opening",
    },
];

pub const VERDICT_FLOOR: Verdict<EyeAssessment> = Verdict {
    min_score: f64::NEG_INFINITY,
    assessment: EyeAssessment::Poor,
    interpretation: "Poor eye contact - frequently looking away or eyes closed/too wide",
};

pub const ADVICE_THRESHOLD: f64 = 0.6;

pub const CONTACT_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Improve eye contact - maintain focus on the camera",
);
pub const OPENING_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Adjust eye opening - keep eyes naturally open, not too closed or wide",
);
pub const POSITIVE_ADVICE: &str = "Maintain your excellent eye contact!";
