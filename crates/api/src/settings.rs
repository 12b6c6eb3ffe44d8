//! Service settings
//!
//! Built-in defaults, then an optional TOML file, then `DELIVERY_*`
//! environment variables (`DELIVERY_SERVER__BIND_ADDR=127.0.0.1:9000`).

use serde::{Deserialize, Serialize};

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "config/default";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json: false,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Landmark detection runs on every n-th frame
    pub frame_stride: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            frame_stride: clip_capture::DEFAULT_FRAME_STRIDE,
        }
    }
}

impl Settings {
    /// Load from the default settings file and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_SETTINGS_PATH)
    }

    /// Load from `path` (any format `config` understands, extension optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("server.bind_addr", defaults.server.bind_addr)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("analysis.frame_stride", defaults.analysis.frame_stride as i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("DELIVERY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
