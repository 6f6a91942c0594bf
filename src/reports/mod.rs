//! Reports module for places-hub
//!
//! Shapes aggregation results into named, ready-to-render bundles: budget
//! KPIs, spend charts, vendor risk, pipeline telemetry and the data
//! dictionary, plus a dashboard that holds them all.

pub mod charts;
pub mod dashboard;
pub mod dictionary;
pub mod kpi;
pub mod status;
pub mod telemetry;
pub mod vendor_risk;

pub use charts::{SpendChartsReport, SpendDimension};
pub use dashboard::DashboardReport;
pub use dictionary::DataDictionaryReport;
pub use kpi::KpiReport;
pub use status::PanelStatus;
pub use telemetry::TelemetryReport;
pub use vendor_risk::VendorRiskReport;
