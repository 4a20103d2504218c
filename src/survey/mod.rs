//! Survey engine
//!
//! The navigator walks the declarative survey graph with full undo support;
//! the outcome module turns a finished run's action queue into deliverable
//! content.

pub mod navigator;
pub mod outcome;

pub use navigator::{
    answer, back, can_start, start, BackOutcome, NavigationState, RecordedAnswer, StartOutcome,
    Step,
};
pub use outcome::{collect_outcome, collect_outcome_with, SurveyOutcome};
