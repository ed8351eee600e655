use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gridpro::{Config, parse_args};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn summarize(config: &Config) -> String {
    let grid = config
        .grid
        .map_or_else(|| "auto".to_string(), |g| g.to_string());
    let resolution = config
        .resolution
        .map_or_else(|| "auto".to_string(), |r| r.to_string());
    format!(
        "inputs: {}\ngrid: {}\nresolution: {}",
        config.input_files.len(),
        grid,
        resolution
    )
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let args = args.with_trailing_switches();
    if args.log {
        init_logging();
    }

    let report = parse_args(&args.tokens);

    if !report.errors.is_empty() {
        for e in &report.errors {
            warn!("Rejected {}: {}", e.flag(), e);
            eprintln!("error: {}", e);
        }
        return Err(AppError::InvalidArguments {
            count: report.errors.len(),
        }
        .into());
    }

    let config = report.config;
    if config.input_files.is_empty() && !args.allow_empty {
        return Err(AppError::NoInputs.into());
    }

    info!(
        "Parsed {} input(s), grid {:?}, resolution {:?}",
        config.input_files.len(),
        config.grid,
        config.resolution
    );

    if args.json {
        let json = config.to_json_pretty().map_err(AppError::from)?;
        println!("{}", json);
    } else {
        println!("{}", summarize(&config));
    }

    Ok(())
}
