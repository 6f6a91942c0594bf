//! Configuration module for places-hub
//!
//! This module provides configuration management including:
//! - Project directory and input file resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PlacesPaths;
pub use settings::{Settings, DEFAULT_RELIABILITY_THRESHOLD};
