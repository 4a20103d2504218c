//! Display formatting for terminal output

pub mod calendar;

pub use calendar::{format_entry_list, format_grouped};
