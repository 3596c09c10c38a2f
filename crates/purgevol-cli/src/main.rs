//! Purgevol — command-line purge volume calculator.
//!
//! Prints purge volumes for single color transitions or a full tool matrix
//! in the `PURGE_VOLUMES` format consumed by wash/flush macros.

mod command;
mod config;

use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use purgevol_core::{FlushBreakdown, FlushMatrix, FlushVolumeEstimator, Rgb8};

use command::{CliError, Command, Output, USAGE};
use config::AppConfig;

/// Tool colors for the demo matrix.
const DEMO_TOOL_COLORS: &str = "FFFF00,80FFFF,FFFFFF,FF8000";
/// Log filter when the configuration itself failed to load.
const FALLBACK_LOG_FILTER: &str = "error";

#[derive(Serialize)]
struct PairReport {
    from: Rgb8,
    to: Rgb8,
    #[serde(flatten)]
    breakdown: FlushBreakdown,
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_logging(FALLBACK_LOG_FILTER);
            tracing::error!("{e}");
            eprintln!("purgevol: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.log_filter);

    match run(&config, std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("purgevol: {e}");
            if matches!(
                e,
                CliError::UnknownCommand(_)
                    | CliError::MissingArgument { .. }
                    | CliError::UnexpectedArgument(_)
            ) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &AppConfig, args: impl Iterator<Item = String>) -> Result<(), CliError> {
    if let Some(path) = &config.source {
        tracing::info!("loaded estimator config from {}", path.display());
    }
    if let Err(e) = config.estimator.validate() {
        tracing::warn!("{e}; results may fall outside [0, max_flush_vol]");
    }

    let estimator = FlushVolumeEstimator::new(config.estimator);

    match Command::parse(args)? {
        Command::Help => println!("{USAGE}"),
        Command::Demo => run_demo(&estimator)?,
        Command::Pair { from, to, output } => {
            let from: Rgb8 = from.parse()?;
            let to: Rgb8 = to.parse()?;
            let breakdown = estimator.breakdown(from.normalized(), to.normalized());
            match output {
                Output::Text => println!("{}", breakdown.volume),
                Output::Json => {
                    let report = PairReport {
                        from,
                        to,
                        breakdown,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Command::Matrix { colors, output } => {
            let matrix = FlushMatrix::from_color_list(&estimator, &colors)?;
            match output {
                Output::Text => print_matrix(&colors, &matrix),
                Output::Json => println!("{}", serde_json::to_string_pretty(&matrix)?),
            }
        }
    }
    Ok(())
}

fn run_demo(estimator: &FlushVolumeEstimator) -> Result<(), CliError> {
    let vol = estimator.estimate(Rgb8::new(192, 192, 192), Rgb8::new(247, 35, 35));
    println!("rgb(192, 192, 192) -> rgb(247, 35, 35): {vol}");

    let vol = estimator.estimate_hex("#C0C0C0", "#F72323")?;
    println!("#C0C0C0 -> #F72323: {vol}");

    let vol = estimator.estimate_hex("C0C0C0", "F72323")?;
    println!("C0C0C0 -> F72323: {vol}");

    let matrix = FlushMatrix::from_color_list(estimator, DEMO_TOOL_COLORS)?;
    println!();
    print_matrix(DEMO_TOOL_COLORS, &matrix);
    Ok(())
}

fn print_matrix(tool_colors: &str, matrix: &FlushMatrix) {
    println!("TOOL_COLORS={tool_colors}");
    println!("PURGE_VOLUMES={matrix}");
}
