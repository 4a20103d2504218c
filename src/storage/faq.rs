//! FAQ repository
//!
//! Same explicit-cache shape as the survey repository. A missing FAQ file is
//! not an error: browsing starts from an empty structure, matching how the
//! original system behaves on first run.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{OtchetnikError, OtchetnikResult};
use crate::models::FaqData;

use super::file_io::{read_json, write_json_atomic};

/// Repository for FAQ data with an explicit in-memory cache
pub struct FaqRepository {
    path: PathBuf,
    cache: RwLock<Option<FaqData>>,
}

impl FaqRepository {
    /// Create a new FAQ repository (nothing is loaded yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::new(None),
        }
    }

    /// Get the FAQ data, loading from disk on first access.
    /// A missing file yields the empty structure; malformed data fails loudly.
    pub fn data(&self) -> OtchetnikResult<FaqData> {
        {
            let cache = self.cache.read().map_err(|e| {
                OtchetnikError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            if let Some(data) = cache.as_ref() {
                return Ok(data.clone());
            }
        }

        self.reload()
    }

    /// Drop the cache and load fresh data from disk
    pub fn reload(&self) -> OtchetnikResult<FaqData> {
        let data: FaqData = read_json(&self.path)?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *cache = Some(data.clone());
        Ok(data)
    }

    /// Persist FAQ data and refresh the cache
    pub fn save(&self, data: &FaqData) -> OtchetnikResult<()> {
        write_json_atomic(&self.path, data)?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *cache = Some(data.clone());
        Ok(())
    }
}
