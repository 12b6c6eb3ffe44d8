//! Eye contact analyzer configuration

use clip_capture::SamplerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EyeContactConfig {
    #[serde(default)]
    pub sampler: SamplerConfig,
}

impl EyeContactConfig {
    pub fn with_stride(frame_stride: u64) -> Self {
        Self {
            sampler: SamplerConfig {
                frame_stride,
                ..Default::default()
            },
        }
    }
}
