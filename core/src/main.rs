use clap::{Args, Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;

use geomag::magnetic::WMM_GRID;
use geomag::records::{FieldRecord, QueryRecord, SurveyConfig};

mod common;
use common::{init_logger, print_record, validate_input_file, validate_output_path};

const LONG_ABOUT: &str = "GEOMAG: Earth's magnetic field from a precomputed World Magnetic Model grid.

This program looks up the magnetic intensity (Gauss), declination and inclination (degrees) at a latitude/longitude by bilinear interpolation over a 10 degree world table, and reconstructs the North-East-Down field vector from them. Altitude and time are not modeled: the table describes the field on the WGS84 ellipsoid at a single epoch.

Points outside +/-90 degrees latitude or +/-180 degrees longitude are clamped onto the table edge and reported with inside:false.

Batch input CSV files need `latitude` and `longitude` columns with an optional `name` column. Survey files list the same fields under `points` and may be JSON, YAML or TOML.";

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = LONG_ABOUT)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Logging configuration
    #[command(flatten)]
    logging: LoggingArgs,
}

#[derive(Args, Clone, Debug)]
struct LoggingArgs {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    /// Log file path (logs to stderr if not specified)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    /// Evaluate a single point
    Point(PointArgs),
    /// Evaluate the built-in set of reference cities and table edges
    Demo,
    /// Evaluate every point listed in a survey file
    Survey(SurveyArgs),
    /// Evaluate a CSV of query points into a CSV of results
    Batch(BatchArgs),
    /// Write the built-in survey to a file (json|yaml|yml|toml)
    InitConfig(InitConfigArgs),
}

#[derive(Args, Clone, Debug)]
struct PointArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f32,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f32,
}

#[derive(Args, Clone, Debug)]
struct SurveyArgs {
    /// Survey file (json|yaml|yml|toml); the built-in survey is used if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Optional CSV file for the results
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
struct BatchArgs {
    /// Input CSV file path
    #[arg(short, long, value_parser)]
    input: PathBuf,
    /// Output CSV file path
    #[arg(short, long, value_parser)]
    output: PathBuf,
}

#[derive(Args, Clone, Debug)]
struct InitConfigArgs {
    /// Output file path
    #[arg(short, long, value_parser)]
    output: PathBuf,
}

fn run_point(args: &PointArgs) -> Result<(), Box<dyn Error>> {
    let query = QueryRecord {
        name: None,
        latitude: args.lat,
        longitude: args.lon,
    };
    print_record(&FieldRecord::evaluate(&WMM_GRID, &query));
    Ok(())
}

fn run_survey(survey: &SurveyConfig, output: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let results = survey.evaluate(&WMM_GRID);
    for record in &results {
        print_record(record);
    }
    if let Some(path) = output {
        validate_output_path(path)?;
        FieldRecord::to_csv(&results, path)?;
        info!("Wrote {} results to {}", results.len(), path.display());
    }
    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<(), Box<dyn Error>> {
    validate_input_file(&args.input)?;
    validate_output_path(&args.output)?;
    let queries = QueryRecord::from_csv(&args.input)?;
    info!("Read {} query points from {}", queries.len(), args.input.display());
    let results: Vec<FieldRecord> = queries
        .iter()
        .map(|query| FieldRecord::evaluate(&WMM_GRID, query))
        .collect();
    let clamped = results.iter().filter(|r| !r.in_bounds).count();
    if clamped > 0 {
        log::warn!("{} of {} points were outside the table and clamped", clamped, results.len());
    }
    FieldRecord::to_csv(&results, &args.output)?;
    info!("Wrote {} results to {}", results.len(), args.output.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(&cli.logging.log_level, cli.logging.log_file.as_ref())?;
    info!("Using {}", WMM_GRID);
    match &cli.command {
        Command::Point(args) => run_point(args),
        Command::Demo => run_survey(&SurveyConfig::default(), None),
        Command::Survey(args) => {
            let survey = match &args.config {
                Some(path) => {
                    validate_input_file(path)?;
                    SurveyConfig::from_file(path)?
                }
                None => SurveyConfig::default(),
            };
            run_survey(&survey, args.output.as_ref())
        }
        Command::Batch(args) => run_batch(args),
        Command::InitConfig(args) => {
            validate_output_path(&args.output)?;
            SurveyConfig::default().to_file(&args.output)?;
            info!("Wrote default survey to {}", args.output.display());
            Ok(())
        }
    }
}
