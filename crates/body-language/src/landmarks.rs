//! Body landmark roles (BlazePose 33-point topology)

use crate::BodyLanguageError;
use clip_capture::{LandmarkFrame, LandmarkPoint};

/// Number of points in a complete body landmark set
pub const BODY_LANDMARK_COUNT: usize = 33;

/// Semantic roles used by the body metrics, valued by landmark index
///
/// Wrists are read from the BlazePose wrist points 15/16. Scorers that read
/// indices 9/10 (the mouth corners) for wrists produce different gesture
/// scores on the same provider output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEar = 7,
    RightEar = 8,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
}

impl BodyLandmark {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The named points one frame's body metrics read
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyKeypoints {
    pub nose: LandmarkPoint,
    pub left_ear: LandmarkPoint,
    pub right_ear: LandmarkPoint,
    pub left_shoulder: LandmarkPoint,
    pub right_shoulder: LandmarkPoint,
    pub left_wrist: LandmarkPoint,
    pub right_wrist: LandmarkPoint,
    pub left_hip: LandmarkPoint,
    pub right_hip: LandmarkPoint,
}

impl BodyKeypoints {
    /// Pick the named roles out of a landmark frame
    pub fn from_frame(frame: &LandmarkFrame) -> Result<Self, BodyLanguageError> {
        let point = |role: BodyLandmark| {
            frame
                .get(role.index())
                .copied()
                .ok_or(BodyLanguageError::LandmarksMissing(role))
        };

        Ok(Self {
            nose: point(BodyLandmark::Nose)?,
            left_ear: point(BodyLandmark::LeftEar)?,
            right_ear: point(BodyLandmark::RightEar)?,
            left_shoulder: point(BodyLandmark::LeftShoulder)?,
            right_shoulder: point(BodyLandmark::RightShoulder)?,
            left_wrist: point(BodyLandmark::LeftWrist)?,
            right_wrist: point(BodyLandmark::RightWrist)?,
            left_hip: point(BodyLandmark::LeftHip)?,
            right_hip: point(BodyLandmark::RightHip)?,
        })
    }

    pub fn shoulder_center(&self) -> LandmarkPoint {
        self.left_shoulder.midpoint(&self.right_shoulder)
    }

    pub fn hip_center(&self) -> LandmarkPoint {
        self.left_hip.midpoint(&self.right_hip)
    }
}

/// Upright, centered, level skeleton used across the crate's tests
#[cfg(test)]
pub(crate) fn upright_frame() -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(vec![LandmarkPoint::at(0.5, 0.5); BODY_LANDMARK_COUNT]);
    let place = |frame: &mut LandmarkFrame, role: BodyLandmark, x: f64, y: f64| {
        frame.set(role.index(), LandmarkPoint::at(x, y));
    };
    place(&mut frame, BodyLandmark::Nose, 0.5, 0.2);
    place(&mut frame, BodyLandmark::LeftEar, 0.55, 0.18);
    place(&mut frame, BodyLandmark::RightEar, 0.45, 0.18);
    place(&mut frame, BodyLandmark::LeftShoulder, 0.6, 0.3);
    place(&mut frame, BodyLandmark::RightShoulder, 0.4, 0.3);
    place(&mut frame, BodyLandmark::LeftWrist, 0.65, 0.45);
    place(&mut frame, BodyLandmark::RightWrist, 0.35, 0.45);
    place(&mut frame, BodyLandmark::LeftHip, 0.55, 0.6);
    place(&mut frame, BodyLandmark::RightHip, 0.45, 0.6);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_roles() {
        let kp = BodyKeypoints::from_frame(&upright_frame()).unwrap();
        assert_eq!(kp.nose, LandmarkPoint::at(0.5, 0.2));
        assert!((kp.shoulder_center().x - 0.5).abs() < 1e-12);
        assert!((kp.hip_center().y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_short_frame_is_rejected() {
        let frame = LandmarkFrame::new(vec![LandmarkPoint::at(0.5, 0.5); 12]);
        let err = BodyKeypoints::from_frame(&frame).unwrap_err();
        assert!(matches!(
            err,
            BodyLanguageError::LandmarksMissing(BodyLandmark::RightShoulder)
        ));
    }
}
