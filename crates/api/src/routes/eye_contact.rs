//! Eye Contact Route

use axum::{extract::State, Json};
use clip_capture::{LandmarkTrack, PassthroughDetector};
use eye_contact::EyeContactReport;
use std::path::Path;
use tracing::info;

use super::{assessment_label, record_analysis, AnalysisEnvelope, LandmarkTrackRequest, TrackOpener};
use crate::{ApiError, SharedState};

/// Score a face mesh track
pub async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<LandmarkTrackRequest>,
) -> Result<Json<AnalysisEnvelope<EyeContactReport>>, ApiError> {
    let analyzer = state.read().await.eye_analyzer.clone();
    info!("Eye contact request: {} frames", request.frames.len());

    let report = tokio::task::spawn_blocking(move || {
        let track = LandmarkTrack::new(request.frames);
        match request.clip_name {
            Some(name) => analyzer.analyze_path(Path::new(&name), &TrackOpener(track), PassthroughDetector),
            None => analyzer.analyze(track, PassthroughDetector),
        }
    })
    .await??;

    state.write().await.analyses_served += 1;
    record_analysis("eye_contact", assessment_label(&report.assessment), Some(report.frames_analyzed()));

    Ok(Json(AnalysisEnvelope::new(report)))
}
