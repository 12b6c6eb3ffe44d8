//! Clip Capture Library for Delivery Scoring
//!
//! Contracts for the external collaborators that feed the scoring engines,
//! plus the frame sampler that sits between them:
//! - Clip decoding (any container the opener understands)
//! - Landmark detection (BlazePose body / FaceMesh face sets)
//! - Mono PCM audio buffers for acoustic analysis

pub mod audio;
pub mod format;
pub mod landmark;
pub mod sampler;
pub mod source;

pub use audio::{AudioBuffer, AudioDuration};
pub use format::check_container;
pub use landmark::{LandmarkFrame, LandmarkPoint};
pub use sampler::{open_sampled, FrameSampler, SamplerConfig, DEFAULT_FRAME_STRIDE};
pub use source::{AudioOpener, ClipOpener, ClipSource, LandmarkDetector, LandmarkTrack, PassthroughDetector};

use thiserror::Error;

/// Clip error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    #[error("Could not read clip: {0}")]
    Unreadable(String),

    #[error("Unsupported container format: {extension:?}")]
    UnsupportedFormat { extension: Option<String> },

    #[error("Landmark set incomplete: expected {expected} points, got {actual}")]
    IncompleteLandmarks { expected: usize, actual: usize },
}
