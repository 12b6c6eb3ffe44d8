//! Per-frame body metric evaluators
//!
//! Pure functions of one frame's keypoints. All distances are in normalized
//! image coordinates, y grows downward.

use crate::landmarks::BodyKeypoints;
use crate::thresholds::*;
use crate::BodyLanguageError;
use clip_capture::{LandmarkFrame, LandmarkPoint};
use scoring_core::{clamp_unit, step_score};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Scores for a single processed frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFrameScores {
    pub posture: f64,
    pub shoulder_alignment: f64,
    pub head_position: f64,
    pub gestures: f64,
    /// Fraction of all landmarks detected with confidence; diagnostic only
    pub detection_confidence: f64,
}

/// Score every body metric on one landmark frame
pub fn evaluate_frame(frame: &LandmarkFrame) -> Result<BodyFrameScores, BodyLanguageError> {
    let kp = BodyKeypoints::from_frame(frame)?;

    Ok(BodyFrameScores {
        posture: posture_score(&kp),
        shoulder_alignment: shoulder_alignment_score(&kp.left_shoulder, &kp.right_shoulder),
        head_position: head_position_score(&kp),
        gestures: gesture_score(&kp),
        detection_confidence: frame.visible_fraction(VISIBILITY_THRESHOLD),
    })
}

/// Spine straightness: lean, forward head and slouch penalties off 1.0
pub fn posture_score(kp: &BodyKeypoints) -> f64 {
    let shoulder = kp.shoulder_center();
    let hip = kp.hip_center();

    let torso_height = (shoulder.y - hip.y).abs();
    if torso_height < MIN_TORSO_HEIGHT {
        warn!("Degenerate pose, torso height {:.4}", torso_height);
        return NEUTRAL_SCORE;
    }

    let lean_ratio = (shoulder.x - hip.x).abs() / torso_height;
    let lean_penalty = step_score(lean_ratio, &LEAN_PENALTY);
    let forward_penalty = step_score((kp.nose.x - shoulder.x).abs(), &FORWARD_HEAD_PENALTY);
    let slouch_penalty = step_score(shoulder.y - hip.y, &SLOUCH_PENALTY);

    clamp_unit(1.0 - lean_penalty - forward_penalty - slouch_penalty)
}

/// Level shoulders score 1.0; tilt costs twice its slope
pub fn shoulder_alignment_score(left: &LandmarkPoint, right: &LandmarkPoint) -> f64 {
    let width = (left.x - right.x).abs();
    if width == 0.0 {
        return NEUTRAL_SCORE;
    }
    let tilt_ratio = (left.y - right.y).abs() / width;
    clamp_unit(1.0 - SHOULDER_TILT_FACTOR * tilt_ratio)
}

/// Head carried above the shoulders with level ears
pub fn head_position_score(kp: &BodyKeypoints) -> f64 {
    let shoulder = kp.shoulder_center();

    let drop_penalty = if kp.nose.y - shoulder.y > HEAD_DROP_LIMIT {
        HEAD_DROP_PENALTY
    } else {
        0.0
    };

    let ear_width = (kp.left_ear.x - kp.right_ear.x).abs();
    let tilt_penalty = if ear_width == 0.0 {
        0.0
    } else {
        let slope = (kp.left_ear.y - kp.right_ear.y).abs() / ear_width;
        (slope * EAR_TILT_FACTOR).min(EAR_TILT_MAX_PENALTY)
    };

    clamp_unit(1.0 - drop_penalty - tilt_penalty)
}

/// Visible, raised hands that are not crossed over the body
pub fn gesture_score(kp: &BodyKeypoints) -> f64 {
    let shoulder = kp.shoulder_center();

    let wrist_ok = |wrist: &LandmarkPoint| {
        wrist.visibility > VISIBILITY_THRESHOLD && wrist.y < shoulder.y + WRIST_DROP_LIMIT
    };
    let good_wrists = [&kp.left_wrist, &kp.right_wrist]
        .into_iter()
        .filter(|w| wrist_ok(w))
        .count();
    let visibility_score = good_wrists as f64 / 2.0;

    let left_crossed = kp.left_wrist.x > shoulder.x + CROSSING_REACH;
    let right_crossed = kp.right_wrist.x < shoulder.x - CROSSING_REACH;
    let crossing_score = if left_crossed && right_crossed {
        CROSSED_ARMS_SCORE
    } else {
        OPEN_ARMS_SCORE
    };

    clamp_unit(visibility_score * WRIST_VISIBILITY_WEIGHT + crossing_score * CROSSING_WEIGHT)
}
