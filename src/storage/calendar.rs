//! Calendar repository for JSON storage
//!
//! The calendar file is a flat ordered JSON array of report entries. Loading
//! re-sorts by due date so the calendar invariant holds even when the source
//! data was written unsorted.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::OtchetnikError;
use crate::models::ReportEntry;
use crate::reports::ReportCalendar;

use super::file_io::{read_json, write_json_atomic};

/// Repository for report calendar persistence
pub struct CalendarRepository {
    path: PathBuf,
    data: RwLock<ReportCalendar>,
}

impl CalendarRepository {
    /// Create a new calendar repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ReportCalendar::new()),
        }
    }

    /// Load the calendar from disk, restoring the sort invariant.
    /// A missing file yields an empty calendar.
    pub fn load(&self) -> Result<(), OtchetnikError> {
        let entries: Vec<ReportEntry> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = ReportCalendar::from_entries(entries);
        Ok(())
    }

    /// Save the calendar to disk as a sorted flat array
    pub fn save(&self) -> Result<(), OtchetnikError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.sort();
        write_json_atomic(&self.path, &data.entries().to_vec())
    }

    /// Replace the in-memory calendar (generation writes a whole new one)
    pub fn replace(&self, calendar: ReportCalendar) -> Result<(), OtchetnikError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = calendar;
        data.sort();
        Ok(())
    }

    /// Get a snapshot of the current calendar
    pub fn calendar(&self) -> Result<ReportCalendar, OtchetnikError> {
        let data = self
            .data
            .read()
            .map_err(|e| OtchetnikError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }
}
