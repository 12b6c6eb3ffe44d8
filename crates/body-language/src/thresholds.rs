//! Fixed scoring constants for the body metrics

use crate::analysis::BodyAssessment;
use scoring_core::{AdvisoryRule, Step, StepTable, Verdict};

/// Landmarks with visibility above this count as detected
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Score returned when a metric cannot be assessed on a frame
pub const NEUTRAL_SCORE: f64 = 0.5;

// Posture

/// Vertical shoulder-to-hip gap below which the pose is degenerate
pub const MIN_TORSO_HEIGHT: f64 = 0.01;

/// Penalty by horizontal lean per unit of torso height
pub const LEAN_PENALTY: StepTable = StepTable {
    steps: &[Step::new(0.02, 0.0), Step::new(0.05, 0.2), Step::new(0.1, 0.5)],
    otherwise: 0.9,
};

/// Penalty by horizontal nose offset from the shoulder center
pub const FORWARD_HEAD_PENALTY: StepTable = StepTable {
    steps: &[Step::new(0.02, 0.0), Step::new(0.05, 0.3), Step::new(0.1, 0.6)],
    otherwise: 0.95,
};

/// Penalty by `shoulder_center.y - hip_center.y` (negative = shoulders higher)
pub const SLOUCH_PENALTY: StepTable = StepTable {
    steps: &[
        Step::new(-0.05, 0.0),
        Step::new(0.0, 0.1),
        Step::new(0.02, 0.5),
        Step::new(0.08, 0.75),
    ],
    otherwise: 0.95,
};

// Shoulder alignment

pub const SHOULDER_TILT_FACTOR: f64 = 2.0;

// Head position

/// Nose this far below the shoulder center counts as a dropped head
pub const HEAD_DROP_LIMIT: f64 = 0.1;
pub const HEAD_DROP_PENALTY: f64 = 0.3;
pub const EAR_TILT_FACTOR: f64 = 0.5;
pub const EAR_TILT_MAX_PENALTY: f64 = 0.3;

// Gestures

/// Wrists must sit less than this far below the shoulder center
pub const WRIST_DROP_LIMIT: f64 = 0.3;
/// Horizontal reach past the body center that counts as crossed
pub const CROSSING_REACH: f64 = 0.2;
pub const CROSSED_ARMS_SCORE: f64 = 0.3;
pub const OPEN_ARMS_SCORE: f64 = 0.7;
pub const WRIST_VISIBILITY_WEIGHT: f64 = 0.6;
pub const CROSSING_WEIGHT: f64 = 0.4;

// Overall score

pub const POSTURE_WEIGHT: f64 = 0.35;
pub const SHOULDER_WEIGHT: f64 = 0.20;
pub const HEAD_WEIGHT: f64 = 0.20;
pub const GESTURE_WEIGHT: f64 = 0.25;

pub const VERDICTS: [Verdict<BodyAssessment>; 2] = [
    Verdict {
        min_score: 0.70,
        assessment: BodyAssessment::Good,
        interpretation: "Good body language - demonstrates confidence and professionalism",
    },
    Verdict {
        min_score: 0.50,
        assessment: BodyAssessment::Fair,
        interpretation: "Fair body language - room for improvement in posture and gestures",
    },
];

pub const VERDICT_FLOOR: Verdict<BodyAssessment> = Verdict {
    min_score: f64::NEG_INFINITY,
    assessment: BodyAssessment::Bad,
    interpretation:
        "Poor body language - needs significant improvement in posture, alignment, or engagement",
};

// Recommendations

pub const ADVICE_THRESHOLD: f64 = 0.6;

pub const POSTURE_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Improve posture - keep your back straight and aligned with hips",
);
pub const SHOULDER_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Keep shoulders level and relaxed, avoid hunching or tilting",
);
pub const HEAD_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Maintain neutral head position aligned with shoulders, avoid excessive tilting",
);
pub const GESTURE_ADVICE: AdvisoryRule = AdvisoryRule::new(
    ADVICE_THRESHOLD,
    "Use more natural hand gestures while keeping them visible and controlled",
);
pub const POSITIVE_ADVICE: &str = "Continue maintaining your excellent body language!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total = POSTURE_WEIGHT + SHOULDER_WEIGHT + HEAD_WEIGHT + GESTURE_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tables_ascending() {
        for table in [&LEAN_PENALTY, &FORWARD_HEAD_PENALTY, &SLOUCH_PENALTY] {
            assert!(table.steps.windows(2).all(|w| w[0].below < w[1].below));
        }
    }

    #[test]
    fn test_exact_bounds_take_the_next_step() {
        use scoring_core::step_score;

        assert_eq!(step_score(0.0199, &LEAN_PENALTY), 0.0);
        assert_eq!(step_score(0.02, &LEAN_PENALTY), 0.2);
        assert_eq!(step_score(0.1, &LEAN_PENALTY), 0.9);
        assert_eq!(step_score(-0.05, &SLOUCH_PENALTY), 0.1);
        assert_eq!(step_score(0.08, &SLOUCH_PENALTY), 0.95);
    }
}
