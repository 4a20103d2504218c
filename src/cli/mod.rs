//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod calendar;
pub mod faq;
pub mod survey;

pub use calendar::{handle_calendar_command, CalendarCommands};
pub use faq::{handle_faq_command, FaqCommands};
pub use survey::{handle_survey_command, SurveyCommands};
