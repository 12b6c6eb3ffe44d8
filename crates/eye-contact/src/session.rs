//! Per-call accumulation of eye metric scores

use crate::analysis::{EyeContactReport, EyeMetricMeans};
use crate::metrics::{evaluate_frame, EyeFrameScores};
use crate::EyeContactError;
use clip_capture::LandmarkFrame;
use scoring_core::MetricSeries;

#[derive(Debug, Default)]
pub struct EyeSession {
    eye_contact: MetricSeries,
    eye_opening: MetricSeries,
    combined: MetricSeries,
    frames: usize,
}

impl EyeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, frame: &LandmarkFrame) -> Result<EyeFrameScores, EyeContactError> {
        let scores = evaluate_frame(frame)?;
        self.eye_contact.push(scores.eye_contact);
        self.eye_opening.push(scores.eye_opening);
        self.combined.push(scores.combined);
        self.frames += 1;
        Ok(scores)
    }

    pub fn frames_processed(&self) -> usize {
        self.frames
    }

    pub fn means(&self) -> Option<EyeMetricMeans> {
        Some(EyeMetricMeans {
            eye_contact: self.eye_contact.mean()?,
            eye_opening: self.eye_opening.mean()?,
            combined: self.combined.mean()?,
        })
    }

    pub fn finish(self) -> EyeContactReport {
        match self.means() {
            Some(means) => EyeContactReport::from_means(means, self.frames),
            None => EyeContactReport::no_face_detected(),
        }
    }
}
