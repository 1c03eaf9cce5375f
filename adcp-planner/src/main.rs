//! Command-line deployment planner for acoustic Doppler current profilers

mod args;
mod plan;
mod report;

use clap::Parser;
use tracing::{debug, info};

use crate::args::{convert_filter, Args};
use crate::plan::PlanFile;
use crate::report::Report;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Library `log` records reach the same subscriber
    tracing_subscriber::fmt()
        .with_max_level(convert_filter(args.verbose.log_level_filter()))
        .with_writer(std::io::stderr)
        .init();

    let mut plan = match &args.config {
        Some(path) => {
            info!("Loading plan {}", path.display());
            PlanFile::load(path)?
        }
        None => PlanFile::default(),
    };
    plan.apply_args(&args);
    debug!("Effective plan: {:?}", plan);

    let config = plan.to_config();
    let report = Report::new(plan.variant, config);
    info!(
        "{} plausibility warning(s), {:.2} battery packs",
        report.warnings.len(),
        report.prediction.battery_packs
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
