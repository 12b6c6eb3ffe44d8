//! External collaborator contracts: clip decoding and landmark detection

use crate::{AudioBuffer, ClipError, LandmarkFrame};
use std::collections::VecDeque;
use std::path::Path;

/// A decoded clip that yields frames in decode order
pub trait ClipSource {
    /// Decoded frame type
    type Frame;

    /// Total frame count reported by the container
    fn total_frames(&self) -> u64;

    /// Next decoded frame, `None` at end of clip
    fn next_frame(&mut self) -> Option<Self::Frame>;
}

/// Opens clips from disk (video decoder bindings live behind this)
pub trait ClipOpener {
    type Clip: ClipSource;

    fn open(&self, path: &Path) -> Result<Self::Clip, ClipError>;
}

/// Audio provider: decodes a recording to a mono buffer
pub trait AudioOpener {
    fn open_audio(&self, path: &Path) -> Result<AudioBuffer, ClipError>;
}

/// Landmark provider: `None` when detection failed for the frame
pub trait LandmarkDetector<F> {
    fn detect(&mut self, frame: &F) -> Option<LandmarkFrame>;
}

impl<F, T> LandmarkDetector<F> for T
where
    T: FnMut(&F) -> Option<LandmarkFrame>,
{
    fn detect(&mut self, frame: &F) -> Option<LandmarkFrame> {
        self(frame)
    }
}

/// In-memory clip of already-extracted landmark sets, one entry per decoded frame
#[derive(Debug, Clone, Default)]
pub struct LandmarkTrack {
    frames: VecDeque<Option<LandmarkFrame>>,
    total: u64,
}

impl LandmarkTrack {
    pub fn new(frames: Vec<Option<LandmarkFrame>>) -> Self {
        let total = frames.len() as u64;
        Self {
            frames: frames.into(),
            total,
        }
    }

    /// Track where every frame carries the same landmark set
    pub fn repeat(frame: LandmarkFrame, count: usize) -> Self {
        Self::new(vec![Some(frame); count])
    }
}

impl ClipSource for LandmarkTrack {
    type Frame = Option<LandmarkFrame>;

    fn total_frames(&self) -> u64 {
        self.total
    }

    fn next_frame(&mut self) -> Option<Self::Frame> {
        self.frames.pop_front()
    }
}

/// Detector for [`LandmarkTrack`] frames: the landmarks are already there
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughDetector;

impl LandmarkDetector<Option<LandmarkFrame>> for PassthroughDetector {
    fn detect(&mut self, frame: &Option<LandmarkFrame>) -> Option<LandmarkFrame> {
        frame.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LandmarkPoint;

    #[test]
    fn test_track_drains_in_order() {
        let a = LandmarkFrame::new(vec![LandmarkPoint::at(0.1, 0.1)]);
        let b = LandmarkFrame::new(vec![LandmarkPoint::at(0.2, 0.2)]);
        let mut track = LandmarkTrack::new(vec![Some(a.clone()), None, Some(b.clone())]);

        assert_eq!(track.total_frames(), 3);
        assert_eq!(track.next_frame(), Some(Some(a)));
        assert_eq!(track.next_frame(), Some(None));
        assert_eq!(track.next_frame(), Some(Some(b)));
        assert_eq!(track.next_frame(), None);
        // Reported total does not shrink while draining
        assert_eq!(track.total_frames(), 3);
    }

    #[test]
    fn test_closure_detector() {
        let mut calls = 0;
        let mut detector = |frame: &u32| {
            calls += 1;
            (*frame > 1).then(LandmarkFrame::default)
        };
        assert!(detector.detect(&0).is_none());
        assert!(detector.detect(&2).is_some());
        assert_eq!(calls, 2);
    }
}
