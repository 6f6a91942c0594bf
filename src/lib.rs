//! Places Hub - campus construction spend and dbt pipeline dashboard
//!
//! This library loads a project spend mart plus the `run_results.json` and
//! `manifest.json` artifacts a dbt run leaves behind, aggregates them, and
//! shapes the results into dashboard panels.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Spend records, money, pipeline results and model docs
//! - `storage`: Readers for the dataset and dbt artifacts, and the loaded session
//! - `services`: Pure aggregation functions
//! - `reports`: Panel view models and the full dashboard
//! - `display`: Terminal formatting helpers
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers for the `places` binary
//! - `telemetry`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use places_hub::config::{PlacesPaths, Settings};
//! use places_hub::models::ReportFilter;
//! use places_hub::reports::DashboardReport;
//! use places_hub::storage::Session;
//!
//! let paths = PlacesPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::load(&paths, &settings)?;
//! let dashboard = DashboardReport::generate(&session, &ReportFilter::default())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use error::{PlacesError, PlacesResult};
