//! Speech-to-text collaborator contract

use clip_capture::AudioBuffer;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranscriptionError {
    /// Audio decoded but no words could be made out
    #[error("Speech could not be understood")]
    Unintelligible,

    #[error("Recognition service error: {0}")]
    Service(String),
}

/// Turns a recording into transcript text
pub trait Transcriber {
    fn transcribe(&mut self, audio: &AudioBuffer) -> Result<String, TranscriptionError>;
}

impl<F> Transcriber for F
where
    F: FnMut(&AudioBuffer) -> Result<String, TranscriptionError>,
{
    fn transcribe(&mut self, audio: &AudioBuffer) -> Result<String, TranscriptionError> {
        self(audio)
    }
}

/// Transcriber for callers that already hold the transcript
#[derive(Debug, Clone, Default)]
pub struct KnownTranscript(pub String);

impl Transcriber for KnownTranscript {
    fn transcribe(&mut self, _audio: &AudioBuffer) -> Result<String, TranscriptionError> {
        Ok(self.0.clone())
    }
}
