use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, Level};

use places_hub::cli::{handle_config_command, handle_report_command, ConfigCommands, ReportCommands};
use places_hub::config::{PlacesPaths, Settings};
use places_hub::models::ReportFilter;
use places_hub::storage::Session;
use places_hub::telemetry::init_tracing;

#[derive(Parser)]
#[command(
    name = "places",
    version,
    about = "Campus construction spend and dbt pipeline dashboard",
    long_about = "Places Hub reads a campus project spend mart together with the dbt \
                  run_results.json and manifest.json artifacts, and reports budget \
                  KPIs, spend breakdowns, vendor risk, pipeline health and model \
                  documentation from the command line."
)]
struct Cli {
    /// Project directory holding data/ and target/ (defaults to PLACES_HUB_DIR or the cwd)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Spend dataset CSV, relative to the project directory
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// dbt run_results.json, relative to the project directory
    #[arg(long, global = true)]
    run_results: Option<PathBuf>,

    /// dbt manifest.json, relative to the project directory
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Campus to report on (defaults to the first campus in the dataset)
    #[arg(short, long, global = true)]
    campus: Option<String>,

    /// Flag vendors with a reliability score below this value (1-100)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=100))]
    threshold: Option<u8>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    init_tracing(cli.log_json, level);

    // Initialize paths and settings
    let paths = match cli.dir {
        Some(dir) => PlacesPaths::with_base_dir(dir),
        None => PlacesPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    if cli.dataset.is_some() {
        settings.dataset_file = cli.dataset;
    }
    if cli.run_results.is_some() {
        settings.run_results_file = cli.run_results;
    }
    if cli.manifest.is_some() {
        settings.manifest_file = cli.manifest;
    }
    if let Some(threshold) = cli.threshold {
        settings.default_reliability_threshold = threshold;
    }
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Config { action }) => {
            handle_config_command(&paths, &settings, action)?;
        }
        Some(Commands::Report(cmd)) => {
            let session = Session::load(&paths, &settings)?;
            let filter = ReportFilter {
                campus: cli.campus,
                reliability_threshold: settings.default_reliability_threshold,
            };
            handle_report_command(&session, &settings, &filter, cmd)?;
        }
        None => {
            println!("Places Hub - campus spend and dbt pipeline dashboard");
            println!();
            println!("Run 'places --help' for usage information.");
            println!("Run 'places dashboard' to render every panel.");
        }
    }

    Ok(())
}
