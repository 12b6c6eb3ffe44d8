//! Face landmark roles (FaceMesh 468-point topology)

use crate::EyeContactError;
use clip_capture::{LandmarkFrame, LandmarkPoint};

/// Number of points in a complete face mesh
pub const FACE_LANDMARK_COUNT: usize = 468;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum FaceLandmark {
    LeftEyeOuter = 130,
    LeftEyeInner = 133,
    LeftEyeLower = 145,
    LeftEyeUpper = 159,
    RightEyeOuter = 359,
    RightEyeInner = 362,
    RightEyeLower = 374,
    RightEyeUpper = 386,
}

impl FaceLandmark {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Inner corner and lid points of one eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeKeypoints {
    pub inner: LandmarkPoint,
    pub upper: LandmarkPoint,
    pub lower: LandmarkPoint,
}

impl EyeKeypoints {
    /// Vertical eyelid gap
    pub fn opening(&self) -> f64 {
        (self.upper.y - self.lower.y).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceKeypoints {
    pub left_eye: EyeKeypoints,
    pub right_eye: EyeKeypoints,
}

impl FaceKeypoints {
    pub fn from_frame(frame: &LandmarkFrame) -> Result<Self, EyeContactError> {
        let point = |role: FaceLandmark| {
            frame
                .get(role.index())
                .copied()
                .ok_or(EyeContactError::LandmarksMissing(role))
        };

        Ok(Self {
            left_eye: EyeKeypoints {
                inner: point(FaceLandmark::LeftEyeInner)?,
                upper: point(FaceLandmark::LeftEyeUpper)?,
                lower: point(FaceLandmark::LeftEyeLower)?,
            },
            right_eye: EyeKeypoints {
                inner: point(FaceLandmark::RightEyeInner)?,
                upper: point(FaceLandmark::RightEyeUpper)?,
                lower: point(FaceLandmark::RightEyeLower)?,
            },
        })
    }

    /// Mean x of the two inner eye corners
    pub fn gaze_x(&self) -> f64 {
        (self.left_eye.inner.x + self.right_eye.inner.x) / 2.0
    }

    /// Mean eyelid gap over both eyes
    pub fn mean_opening(&self) -> f64 {
        (self.left_eye.opening() + self.right_eye.opening()) / 2.0
    }
}

/// Face looking straight at the camera with a natural 0.05 eyelid gap
#[cfg(test)]
pub(crate) fn centered_face() -> LandmarkFrame {
    face_with(0.5, 0.05)
}

/// Face whose inner corners average to `gaze_x` and whose lids are `gap` apart
#[cfg(test)]
pub(crate) fn face_with(gaze_x: f64, gap: f64) -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(vec![LandmarkPoint::at(0.5, 0.5); FACE_LANDMARK_COUNT]);
    let place = |frame: &mut LandmarkFrame, role: FaceLandmark, x: f64, y: f64| {
        frame.set(role.index(), LandmarkPoint::at(x, y));
    };
    place(&mut frame, FaceLandmark::LeftEyeInner, gaze_x - 0.03, 0.4);
    place(&mut frame, FaceLandmark::RightEyeInner, gaze_x + 0.03, 0.4);
    place(&mut frame, FaceLandmark::LeftEyeOuter, gaze_x - 0.1, 0.4);
    place(&mut frame, FaceLandmark::RightEyeOuter, gaze_x + 0.1, 0.4);
    place(&mut frame, FaceLandmark::LeftEyeUpper, gaze_x - 0.06, 0.4 - gap / 2.0);
    place(&mut frame, FaceLandmark::LeftEyeLower, gaze_x - 0.06, 0.4 + gap / 2.0);
    place(&mut frame, FaceLandmark::RightEyeUpper, gaze_x + 0.06, 0.4 - gap / 2.0);
    place(&mut frame, FaceLandmark::RightEyeLower, gaze_x + 0.06, 0.4 + gap / 2.0);
    frame
}
