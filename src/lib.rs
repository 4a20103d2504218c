//! otchetnik - report-deadline calendar and survey engine
//!
//! This library implements the core of a small-business accounting
//! assistant: a deterministic calendar of recurring government-report
//! deadlines, a declarative branching survey engine with undo, and a cyclic
//! FAQ browser. Chat delivery and user persistence belong to the host and
//! are consumed through traits.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (calendar entries, survey graphs, FAQ)
//! - `reports`: Deadline rules and calendar projection
//! - `survey`: Navigation state machine and outcome execution
//! - `faq`: Cyclic browsing cursor
//! - `storage`: JSON file storage layer with explicit caches
//! - `services`: Business logic and collaborator traits
//! - `cli`: Command handlers for the binary
//! - `display`: Terminal formatting helpers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod faq;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod survey;

pub use error::{OtchetnikError, OtchetnikResult};
