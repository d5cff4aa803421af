//! On-disk timing settings.
//!
//! A small optional JSON file under the platform config directory lets the
//! demo (or a host application) override the gesture timings without a
//! rebuild. A missing file is not an error; defaults apply.

use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_DOUBLE_TAP_TIMEOUT, DEFAULT_LONG_PRESS_DELAY, DEFAULT_REPEAT_DELAY,
    DEFAULT_REPEAT_INTERVAL,
};
use crate::gesture::GestureConfig;

/// Errors from loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Default location of the settings file, when a config directory exists.
static SETTINGS_PATH: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join("gesturebutton").join("settings.json")));

/// Serialized gesture timings, in milliseconds.
///
/// Unknown fields are rejected; missing fields fall back to their defaults,
/// so a file overriding a single timing stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureSettings {
    pub long_press_delay_ms: u64,
    pub double_tap_timeout_ms: u64,
    pub repeat_delay_ms: u64,
    pub repeat_interval_ms: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            long_press_delay_ms: DEFAULT_LONG_PRESS_DELAY.as_millis() as u64,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT.as_millis() as u64,
            repeat_delay_ms: DEFAULT_REPEAT_DELAY.as_millis() as u64,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL.as_millis() as u64,
        }
    }
}

impl GestureSettings {
    /// Load from the default location, falling back to defaults when the
    /// file (or the config directory itself) does not exist or fails to
    /// parse.
    pub fn load() -> Self {
        let Some(path) = SETTINGS_PATH.as_deref() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Convert to the classifier's runtime configuration.
    pub fn to_config(&self) -> GestureConfig {
        GestureConfig {
            long_press_delay: Duration::from_millis(self.long_press_delay_ms),
            double_tap_timeout: Duration::from_millis(self.double_tap_timeout_ms),
            repeat_delay: Duration::from_millis(self.repeat_delay_ms),
            repeat_interval: Duration::from_millis(self.repeat_interval_ms),
        }
    }
}
