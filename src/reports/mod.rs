//! Report deadline engine
//!
//! Pure deadline rules for government reports plus the calendar that projects
//! them into concrete dated entries.

pub mod calendar;
pub mod rules;

pub use calendar::{GroupedEntries, ReportCalendar};
pub use rules::{adjust_for_weekend, builtin_rules, DeadlineRule, ReportRule, ScheduledRule};
