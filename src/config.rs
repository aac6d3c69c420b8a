//! Configuration module
//!
//! TOML-backed application config (`~/.config/parking-booking/config.toml`
//! by default) with sane fallbacks. Policy constants live here as named,
//! overridable values rather than literals buried in the decision logic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::reservation::SpotId;

/// Default motorcycle cap per overlapping window.
pub const DEFAULT_MAX_MOTORCYCLES: usize = 4;

/// Default bookable spot set.
pub const DEFAULT_VALID_SPOTS: [u32; 2] = [84, 85];

/// Booking policy: the tunable inputs of the conflict engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    /// Maximum motorcycles admitted per overlapping time window
    pub max_motorcycles: usize,
    /// The spots that may be booked at all
    pub valid_spots: Vec<SpotId>,
}

impl BookingPolicy {
    pub fn is_valid_spot(&self, spot: SpotId) -> bool {
        self.valid_spots.contains(&spot)
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_motorcycles: DEFAULT_MAX_MOTORCYCLES,
            valid_spots: DEFAULT_VALID_SPOTS.iter().copied().map(SpotId).collect(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter (overridden by RUST_LOG)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub booking: BookingPolicy,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
        let cfg: Self = toml::from_str(&raw)?;
        Ok(cfg)
    }

    /// Load from `path`, falling back to defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {0}: {1}")]
    Io(String, String),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default config location: `<user config dir>/parking-booking/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parking-booking")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
