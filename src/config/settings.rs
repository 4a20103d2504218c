//! User settings for otchetnik
//!
//! Manages preferences for calendar generation and the upcoming-reports
//! digest: the base reporting year, how many years of deadlines to project,
//! and how far ahead of a due date the digest should warn.

use serde::{Deserialize, Serialize};

use super::paths::OtchetnikPaths;
use crate::error::OtchetnikError;

/// User settings for otchetnik
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// First reporting year the calendar is generated for
    #[serde(default = "default_base_year")]
    pub base_year: i32,

    /// How many years of deadlines to project when generating the calendar
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Days before a due date the upcoming digest starts warning
    #[serde(default = "default_notify_days_ahead")]
    pub notify_days_ahead: u32,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_year() -> i32 {
    2025
}

fn default_horizon_years() -> u32 {
    10
}

fn default_notify_days_ahead() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            base_year: default_base_year(),
            horizon_years: default_horizon_years(),
            notify_days_ahead: default_notify_days_ahead(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OtchetnikPaths) -> Result<Self, OtchetnikError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OtchetnikError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OtchetnikError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OtchetnikPaths) -> Result<(), OtchetnikError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OtchetnikError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| OtchetnikError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
