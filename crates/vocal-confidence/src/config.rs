//! Vocal confidence analyzer configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocalConfig {
    /// Accepted audio containers (case-insensitive)
    pub accepted_extensions: Vec<String>,
}

impl Default for VocalConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["wav".to_string()],
        }
    }
}
