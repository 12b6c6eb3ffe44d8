//! Vocal Confidence Scoring
//!
//! Judges how confident an answer sounds rather than what it says:
//! - Pause patterns from the audio energy envelope
//! - Filler sounds (um, uh, ...) in the transcript
//! - Speech rate and fluency
//!
//! Penalties are subtracted from a perfect 1.0 and the result is banded from
//! CONFIDENT down to UNCERTAIN.

pub mod analysis;
pub mod config;
pub mod fillers;
pub mod pauses;
pub mod scoring;
pub mod thresholds;
pub mod transcribe;

pub use analysis::{VocalAssessment, VocalDetails, VocalReport};
pub use config::VocalConfig;
pub use pauses::{analyze_pauses, PauseStats};
pub use scoring::SpeechFeatures;
pub use transcribe::{KnownTranscript, Transcriber, TranscriptionError};

use clip_capture::{check_container, AudioBuffer, AudioOpener, ClipError};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Vocal confidence error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VocalError {
    #[error(transparent)]
    Clip(#[from] ClipError),

    #[error("Transcription failed: {0}")]
    Transcription(String),
}

/// Vocal confidence analyzer
#[derive(Debug, Clone, Default)]
pub struct VocalConfidenceAnalyzer {
    config: VocalConfig,
}

impl VocalConfidenceAnalyzer {
    pub fn new(config: VocalConfig) -> Self {
        Self { config }
    }

    /// Check the container, decode the recording and score it
    pub fn analyze_path<O, T>(
        &self,
        path: &Path,
        opener: &O,
        transcriber: &mut T,
    ) -> Result<VocalReport, VocalError>
    where
        O: AudioOpener,
        T: Transcriber,
    {
        check_container(path, &self.config.accepted_extensions)?;
        info!("Analyzing audio: {}", path.display());
        let audio = opener.open_audio(path)?;
        self.analyze(&audio, transcriber)
    }

    /// Transcribe and score a decoded recording.
    ///
    /// Unintelligible speech is a sentinel result; a failing recognition
    /// service is an error.
    pub fn analyze<T: Transcriber>(
        &self,
        audio: &AudioBuffer,
        transcriber: &mut T,
    ) -> Result<VocalReport, VocalError> {
        let transcript = match transcriber.transcribe(audio) {
            Ok(text) => text,
            Err(TranscriptionError::Unintelligible) => {
                warn!("Audio could not be transcribed");
                return Ok(VocalReport::unintelligible());
            }
            Err(TranscriptionError::Service(msg)) => return Err(VocalError::Transcription(msg)),
        };
        Ok(self.analyze_transcript(audio, &transcript))
    }

    /// Score a recording whose transcript is already known
    pub fn analyze_transcript(&self, audio: &AudioBuffer, transcript: &str) -> VocalReport {
        if transcript.trim().is_empty() {
            warn!("No speech in transcript");
            return VocalReport::no_speech();
        }

        let Some(duration) = audio.duration().seconds() else {
            warn!(
                "Audio duration unknown ({} samples at {} Hz)",
                audio.len(),
                audio.sample_rate
            );
            return VocalReport::unknown_duration();
        };

        let features = SpeechFeatures::new(duration, transcript, analyze_pauses(audio));
        debug!(
            "Speech features: {} words, {} fillers, {:.2} words/s, pause ratio {:.3}",
            features.word_count,
            features.filler_count,
            features.words_per_second(),
            features.pause_ratio()
        );

        let report = VocalReport::from_features(&features);
        info!(
            "Vocal confidence: {:?} ({:.3}) over {:.1}s",
            report.assessment, report.confidence_score, duration
        );
        report
    }
}
