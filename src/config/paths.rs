//! Path management for otchetnik
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `OTCHETNIK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/otchetnik` or `~/.config/otchetnik`
//! 3. Windows: `%APPDATA%\otchetnik`

use std::path::PathBuf;

use crate::error::OtchetnikError;

/// Manages all paths used by otchetnik
#[derive(Debug, Clone)]
pub struct OtchetnikPaths {
    /// Base directory for all otchetnik data
    base_dir: PathBuf,
}

impl OtchetnikPaths {
    /// Create a new OtchetnikPaths instance
    ///
    /// Path resolution:
    /// 1. `OTCHETNIK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/otchetnik` or `~/.config/otchetnik`
    /// 3. Windows: `%APPDATA%\otchetnik`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OtchetnikError> {
        let base_dir = if let Ok(custom) = std::env::var("OTCHETNIK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OtchetnikPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/otchetnik/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the storage directory (~/.config/otchetnik/storage/)
    pub fn storage_dir(&self) -> PathBuf {
        self.base_dir.join("storage")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the generated report calendar
    pub fn calendar_file(&self) -> PathBuf {
        self.storage_dir().join("report_calendar.json")
    }

    /// Get the path to the survey graph file
    pub fn surveys_file(&self) -> PathBuf {
        self.storage_dir().join("surveys.json")
    }

    /// Get the path to the FAQ file
    pub fn faq_file(&self) -> PathBuf {
        self.storage_dir().join("faq.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/otchetnik/)
    /// - Storage directory (~/.config/otchetnik/storage/)
    pub fn ensure_directories(&self) -> Result<(), OtchetnikError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OtchetnikError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.storage_dir()).map_err(|e| {
            OtchetnikError::Io(format!("Failed to create storage directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if otchetnik has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OtchetnikError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| String::from("."));
            PathBuf::from(home).join(".config")
        });

    Ok(config_base.join("otchetnik"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OtchetnikError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OtchetnikError::Config("APPDATA environment variable not set".into()))?;

    Ok(PathBuf::from(appdata).join("otchetnik"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = OtchetnikPaths::with_base_dir(PathBuf::from("/tmp/test-otchetnik"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/test-otchetnik"));
        assert_eq!(
            paths.calendar_file(),
            PathBuf::from("/tmp/test-otchetnik/storage/report_calendar.json")
        );
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/test-otchetnik/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OtchetnikPaths::with_base_dir(temp_dir.path().join("otchetnik"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.storage_dir().exists());
    }

    #[test]
    fn test_is_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OtchetnikPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        std::fs::write(paths.settings_file(), "{}").unwrap();
        assert!(paths.is_initialized());
    }
}
