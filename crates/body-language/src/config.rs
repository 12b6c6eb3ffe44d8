//! Body language analyzer configuration

use clip_capture::SamplerConfig;
use serde::{Deserialize, Serialize};

/// Body language analyzer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyLanguageConfig {
    /// Frame stride and accepted containers
    #[serde(default)]
    pub sampler: SamplerConfig,
}

impl BodyLanguageConfig {
    /// Same defaults with a different detection stride
    pub fn with_stride(frame_stride: u64) -> Self {
        Self {
            sampler: SamplerConfig {
                frame_stride,
                ..Default::default()
            },
        }
    }
}
