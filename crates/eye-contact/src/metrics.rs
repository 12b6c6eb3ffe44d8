//! Per-frame eye metric evaluators

use crate::landmarks::FaceKeypoints;
use crate::thresholds::*;
use crate::EyeContactError;
use clip_capture::LandmarkFrame;
use scoring_core::step_score;
use serde::{Deserialize, Serialize};

/// Scores for a single processed frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeFrameScores {
    pub eye_contact: f64,
    pub eye_opening: f64,
    pub combined: f64,
}

pub fn evaluate_frame(frame: &LandmarkFrame) -> Result<EyeFrameScores, EyeContactError> {
    let face = FaceKeypoints::from_frame(frame)?;

    let eye_contact = gaze_score((face.gaze_x() - FRAME_CENTER_X).abs());
    let eye_opening = opening_score(face.mean_opening());

    Ok(EyeFrameScores {
        eye_contact,
        eye_opening,
        combined: combined_score(eye_contact, eye_opening),
    })
}

/// Eye contact score from horizontal deviation off frame center
pub fn gaze_score(deviation: f64) -> f64 {
    step_score(deviation, &EYE_CONTACT)
}

/// Eye opening score from the mean eyelid gap
pub fn opening_score(gap: f64) -> f64 {
    step_score(gap, &EYE_OPENING)
}

pub fn combined_score(eye_contact: f64, eye_opening: f64) -> f64 {
    eye_contact * CONTACT_WEIGHT + eye_opening * OPENING_WEIGHT
}
