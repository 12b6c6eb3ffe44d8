//! Analysis routes

pub mod body_language;
pub mod eye_contact;
pub mod vocal;

use chrono::{DateTime, Utc};
use clip_capture::{ClipError, ClipOpener, LandmarkFrame, LandmarkTrack};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Response wrapper around an engine's result record
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisEnvelope<R> {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub report: R,
}

impl<R> AnalysisEnvelope<R> {
    pub fn new(report: R) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            report,
        }
    }
}

/// Pre-extracted landmarks, one entry per decoded frame (`null` = nothing detected)
#[derive(Debug, Deserialize)]
pub struct LandmarkTrackRequest {
    /// Original clip file name; when given, its container is checked
    #[serde(default)]
    pub clip_name: Option<String>,
    pub frames: Vec<Option<LandmarkFrame>>,
}

/// Opener that hands out an in-memory track for any path
pub(crate) struct TrackOpener(pub LandmarkTrack);

impl ClipOpener for TrackOpener {
    type Clip = LandmarkTrack;

    fn open(&self, _path: &Path) -> Result<LandmarkTrack, ClipError> {
        Ok(self.0.clone())
    }
}

/// Serialized form of an assessment (`GOOD`, `UNABLE_TO_ANALYZE`, ...)
pub(crate) fn assessment_label<A: Serialize>(assessment: &A) -> String {
    serde_json::to_value(assessment)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Count one finished analysis, plus its processed frames for video engines
pub(crate) fn record_analysis(engine: &'static str, assessment: String, frames: Option<usize>) {
    metrics::counter!("delivery_analyses_total", "engine" => engine, "assessment" => assessment)
        .increment(1);
    if let Some(frames) = frames {
        metrics::counter!("delivery_frames_analyzed_total", "engine" => engine)
            .increment(frames as u64);
    }
}
