//! Configuration module for otchetnik
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::OtchetnikPaths;
pub use settings::Settings;
