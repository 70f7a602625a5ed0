//! Game configuration, read from a JSON document.
//!
//! ```json
//! {
//!   "fps_limit": 60,
//!   "time_scale": 1.0,
//!   "initial_stage": "title",
//!   "log_filter": "info",
//!   "window": { "title": "proscenium", "width": 1280, "height": 720 }
//! }
//! ```
//!
//! Every field is optional; unknown fields are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// True when the config file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels.
    pub width: f64,
    /// Logical pixels.
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "proscenium".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frame-rate cap; 0 disables pacing.
    pub fps_limit: u32,
    /// Multiplier applied to every update delta.
    pub time_scale: f32,
    /// Stage activated at startup. The binary picks its own default when unset.
    pub initial_stage: Option<String>,
    /// `env_logger` filter; `RUST_LOG` is used when unset.
    pub log_filter: Option<String>,
    pub window: WindowConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps_limit: 60,
            time_scale: 1.0,
            initial_stage: None,
            log_filter: None,
            window: WindowConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !valid_time_scale(self.time_scale) {
            return Err(ConfigError::Invalid {
                field: "time_scale",
                reason: format!("{} is not a finite, non-negative number", self.time_scale),
            });
        }

        let WindowConfig { width, height, .. } = self.window;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("size {width}x{height} must be positive"),
            });
        }

        Ok(())
    }
}

pub(crate) fn valid_time_scale(scale: f32) -> bool {
    scale.is_finite() && scale >= 0.0
}
