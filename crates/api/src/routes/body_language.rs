//! Body Language Route

use axum::{extract::State, Json};
use body_language::BodyLanguageReport;
use clip_capture::{LandmarkTrack, PassthroughDetector};
use std::path::Path;
use tracing::info;

use super::{assessment_label, record_analysis, AnalysisEnvelope, LandmarkTrackRequest, TrackOpener};
use crate::{ApiError, SharedState};

/// Score a body landmark track
pub async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<LandmarkTrackRequest>,
) -> Result<Json<AnalysisEnvelope<BodyLanguageReport>>, ApiError> {
    let analyzer = state.read().await.body_analyzer.clone();
    info!("Body language request: {} frames", request.frames.len());

    let report = tokio::task::spawn_blocking(move || {
        let track = LandmarkTrack::new(request.frames);
        match request.clip_name {
            Some(name) => analyzer.analyze_path(Path::new(&name), &TrackOpener(track), PassthroughDetector),
            None => analyzer.analyze(track, PassthroughDetector),
        }
    })
    .await??;

    state.write().await.analyses_served += 1;
    record_analysis("body_language", assessment_label(&report.assessment), Some(report.frames_analyzed()));

    Ok(Json(AnalysisEnvelope::new(report)))
}
