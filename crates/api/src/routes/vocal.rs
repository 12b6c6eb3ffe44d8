//! Vocal Confidence Route

use axum::{extract::State, Json};
use clip_capture::{AudioBuffer, AudioOpener, ClipError};
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use vocal_confidence::{KnownTranscript, VocalReport};

use super::{assessment_label, record_analysis, AnalysisEnvelope};
use crate::{ApiError, SharedState};

/// Decoded mono audio plus the transcript the speech-to-text provider produced
#[derive(Debug, Deserialize)]
pub struct VocalRequest {
    /// Original recording file name; when given, its container is checked
    #[serde(default)]
    pub file_name: Option<String>,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
    pub transcript: String,
}

struct BufferOpener(AudioBuffer);

impl AudioOpener for BufferOpener {
    fn open_audio(&self, _path: &Path) -> Result<AudioBuffer, ClipError> {
        Ok(self.0.clone())
    }
}

/// Score vocal confidence of one recording
pub async fn analyze(
    State(state): State<SharedState>,
    Json(request): Json<VocalRequest>,
) -> Result<Json<AnalysisEnvelope<VocalReport>>, ApiError> {
    let analyzer = state.read().await.vocal_analyzer.clone();
    info!(
        "Vocal confidence request: {} samples at {} Hz",
        request.samples.len(),
        request.sample_rate
    );

    let report = tokio::task::spawn_blocking(move || {
        let audio = AudioBuffer::new(request.samples, request.sample_rate);
        let mut transcript = KnownTranscript(request.transcript);
        match request.file_name {
            Some(name) => analyzer.analyze_path(Path::new(&name), &BufferOpener(audio), &mut transcript),
            None => analyzer.analyze(&audio, &mut transcript),
        }
    })
    .await??;

    state.write().await.analyses_served += 1;
    record_analysis("vocal_confidence", assessment_label(&report.assessment), None);

    Ok(Json(AnalysisEnvelope::new(report)))
}
