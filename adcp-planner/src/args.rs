//! Argument parsing for running from the command line

use std::path::PathBuf;

use adcp_predictor::{BatteryType, SubsystemCode};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// JSON deployment plan; flags override its fields
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Hardware subsystem code (e.g. 4 for 300 kHz, 4 beams at 20°); blank selects that default
    #[clap(long, value_parser = valid_subsystem_code)]
    pub variant: Option<SubsystemCode>,
    /// Deployment length in days
    #[clap(short, long, value_parser = positive_f64)]
    pub days: Option<f64>,
    /// Ensemble interval in seconds
    #[clap(short, long, value_parser = positive_f64)]
    pub interval: Option<f64>,
    /// Battery pack chemistry (alkaline or lithium)
    #[clap(short, long, value_parser = valid_battery)]
    pub battery: Option<BatteryType>,
    /// Transmit narrowband pulses instead of broadband codes
    #[clap(long)]
    pub narrowband: bool,
    /// Ensembles per waves burst; zero turns burst sampling off
    #[clap(long)]
    pub burst_ensembles: Option<u32>,
    /// Seconds from the start of one burst to the next
    #[clap(long, value_parser = positive_f64)]
    pub burst_interval: Option<f64>,
    /// Print the report as JSON
    #[clap(long)]
    pub json: bool,
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/// Match verbosity filter with tracing subscriber log levels
pub fn convert_filter(filter: log::LevelFilter) -> tracing_subscriber::filter::LevelFilter {
    match filter {
        log::LevelFilter::Off => tracing_subscriber::filter::LevelFilter::OFF,
        log::LevelFilter::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        log::LevelFilter::Warn => tracing_subscriber::filter::LevelFilter::WARN,
        log::LevelFilter::Info => tracing_subscriber::filter::LevelFilter::INFO,
        log::LevelFilter::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
        log::LevelFilter::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
    }
}

fn valid_subsystem_code(s: &str) -> Result<SubsystemCode, String> {
    if s.trim().is_empty() {
        return Ok(SubsystemCode::DEFAULT);
    }
    let code =
        SubsystemCode::parse(s).ok_or_else(|| format!("Subsystem code is a single character, got {:?}", s))?;
    code.variant()
        .map(|_| code)
        .ok_or_else(|| format!("Unknown subsystem code {:?}", code.0))
}

fn valid_battery(s: &str) -> Result<BatteryType, String> {
    match s.to_ascii_lowercase().as_str() {
        "alkaline" => Ok(BatteryType::Alkaline),
        "lithium" => Ok(BatteryType::Lithium),
        _ => Err("Battery must be alkaline or lithium".to_string()),
    }
}

fn positive_f64(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err("Must be a positive number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
