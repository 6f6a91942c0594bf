//! CLI commands for reports
//!
//! Provides commands for generating and exporting the dashboard panels.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use tracing::warn;

use crate::config::Settings;
use crate::error::{PlacesError, PlacesResult};
use crate::export::{export_dashboard_csv, export_dashboard_json, export_dashboard_yaml};
use crate::models::ReportFilter;
use crate::reports::{
    DashboardReport, DataDictionaryReport, KpiReport, SpendChartsReport, SpendDimension,
    TelemetryReport, VendorRiskReport,
};
use crate::storage::Session;

/// Grouping for the spend command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpendBy {
    Project,
    Date,
    Category,
}

impl From<SpendBy> for SpendDimension {
    fn from(by: SpendBy) -> Self {
        match by {
            SpendBy::Project => SpendDimension::Project,
            SpendBy::Date => SpendDimension::Date,
            SpendBy::Category => SpendDimension::Category,
        }
    }
}

/// Output format for the dashboard command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    /// One CSV file per table; requires --output <DIR>
    Csv,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show budget KPIs across every campus
    #[command(alias = "kpis")]
    Summary,

    /// List the campuses in the dataset
    Campuses,

    /// Show spend for the selected campus
    Spend {
        /// Grouping dimension
        #[arg(short, long, value_enum, default_value = "project")]
        by: SpendBy,

        /// Keep only the top N entries by amount (also applies to --output)
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show vendors below the reliability threshold for the selected campus
    #[command(alias = "risk")]
    Vendors {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show dbt pipeline health from run_results.json
    #[command(alias = "telemetry")]
    Pipeline {
        /// Export the node table to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show model documentation from manifest.json
    #[command(alias = "docs")]
    Dictionary,

    /// Render every panel
    Dashboard {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write to a file (a directory for csv) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn create_output(path: &Path) -> PlacesResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        PlacesError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle report commands against an already-loaded session
pub fn handle_report_command(
    session: &Session,
    settings: &Settings,
    filter: &ReportFilter,
    cmd: ReportCommands,
) -> PlacesResult<()> {
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            println!("{}", KpiReport::generate(session).format_terminal(currency));
        }
        ReportCommands::Campuses => {
            if session.campuses().is_empty() {
                println!("No campuses found in the dataset.");
            }
            for campus in session.campuses() {
                println!("{}", campus);
            }
        }
        ReportCommands::Spend { by, top, output } => {
            let report = SpendChartsReport::generate(session, filter)?;
            let dimension = SpendDimension::from(by);
            if let Some(path) = output {
                report.export_csv(dimension, top, create_output(&path)?)?;
                println!("Spend by {} exported to: {}", dimension, path.display());
            } else {
                println!("{}", report.format_series(dimension, top, currency));
            }
        }
        ReportCommands::Vendors { output } => {
            let report = VendorRiskReport::generate(session, filter)?;
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Vendor risk exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }
        ReportCommands::Pipeline { output } => {
            let report = TelemetryReport::generate(session);
            if let Some(warning) = report.status.warning() {
                warn!("{}", warning);
            }
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Pipeline nodes exported to: {}", path.display());
            } else {
                println!("{}", report.format_terminal());
            }
        }
        ReportCommands::Dictionary => {
            println!("{}", DataDictionaryReport::generate(session).format_terminal());
        }
        ReportCommands::Dashboard { format, output } => {
            let report = DashboardReport::generate(session, filter)?;
            for warning in report.warnings() {
                warn!("{}", warning);
            }
            write_dashboard(&report, format, output.as_deref(), currency)?;
        }
    }

    Ok(())
}

fn write_dashboard(
    report: &DashboardReport,
    format: OutputFormat,
    output: Option<&Path>,
    currency: &str,
) -> PlacesResult<()> {
    if format == OutputFormat::Csv {
        let dir = output.ok_or_else(|| {
            PlacesError::Validation("CSV export needs --output <DIR>".to_string())
        })?;
        let written = export_dashboard_csv(report, dir)?;
        for path in written {
            println!("Exported: {}", path.display());
        }
        return Ok(());
    }

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Json => export_dashboard_json(report, &mut writer)?,
        OutputFormat::Yaml => export_dashboard_yaml(report, &mut writer)?,
        OutputFormat::Text | OutputFormat::Csv => {
            writeln!(writer, "{}", report.format_terminal(currency))
                .map_err(|e| PlacesError::Export(e.to_string()))?;
        }
    }
    writer
        .flush()
        .map_err(|e| PlacesError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Dashboard exported to: {}", path.display());
    }
    Ok(())
}
