//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod config;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use report::{handle_report_command, OutputFormat, ReportCommands, SpendBy};
