//! Core data models for otchetnik
//!
//! This module contains the data structures for the three domain areas:
//! report calendar entries, the survey graph, and the FAQ catalog.

pub mod faq;
pub mod report;
pub mod survey;

pub use faq::{FaqCategory, FaqData, FaqItem, FaqMatch, FaqSection};
pub use report::{parse_ddmmyyyy, PeriodUnit, ReportEntry};
pub use survey::{
    Action, Answer, Question, Survey, SurveyCatalog, SurveySummary, TextPayload, Transition,
};
