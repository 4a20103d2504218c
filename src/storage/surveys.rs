//! Survey catalog repository
//!
//! Survey graphs are read-mostly declarative data: loaded once per process,
//! cached in memory, shared read-only across sessions. The cache is an
//! explicit object with a `reload` operation, not ambient global state.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::models::{Survey, SurveyCatalog};

use super::file_io::read_json_required;

/// Repository for the survey catalog with an explicit in-memory cache
pub struct SurveyRepository {
    path: PathBuf,
    cache: RwLock<Option<SurveyCatalog>>,
}

impl SurveyRepository {
    /// Create a new survey repository (nothing is loaded yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(None),
        }
    }

    /// Get the catalog, loading it from disk on first access.
    /// Malformed persisted data fails loudly.
    pub fn catalog(&self) -> OtchetnikResult<SurveyCatalog> {
        {
            let cache = self.cache.read().map_err(|e| {
                OtchetnikError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            if let Some(catalog) = cache.as_ref() {
                return Ok(catalog.clone());
            }
        }

        self.reload()
    }

    /// Drop the cache and load fresh data from disk
    pub fn reload(&self) -> OtchetnikResult<SurveyCatalog> {
        let catalog: SurveyCatalog = read_json_required(&self.path)?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *cache = Some(catalog.clone());
        Ok(catalog)
    }

    /// Look up a single survey by id
    pub fn survey(&self, survey_id: &str) -> OtchetnikResult<Survey> {
        let catalog = self.catalog()?;
        catalog
            .survey(survey_id)
            .cloned()
            .ok_or_else(|| OtchetnikError::survey_not_found(survey_id))
    }
}
