//! Storage layer for otchetnik
//!
//! Provides JSON file storage with atomic writes and explicit in-memory
//! caches for the read-mostly survey and FAQ data.

pub mod calendar;
pub mod faq;
pub mod file_io;
pub mod surveys;

pub use calendar::CalendarRepository;
pub use faq::FaqRepository;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use surveys::SurveyRepository;

use crate::config::paths::OtchetnikPaths;
use crate::error::OtchetnikError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: OtchetnikPaths,
    pub calendar: CalendarRepository,
    pub surveys: SurveyRepository,
    pub faq: FaqRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: OtchetnikPaths) -> Result<Self, OtchetnikError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            calendar: CalendarRepository::new(paths.calendar_file()),
            surveys: SurveyRepository::new(paths.surveys_file()),
            faq: FaqRepository::new(paths.faq_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OtchetnikPaths {
        &self.paths
    }
}
