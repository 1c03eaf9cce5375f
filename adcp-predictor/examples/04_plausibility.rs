//! Plausibility Checking Example
//!
//! The engines never fail, so a bad plan produces quiet zeros. This example
//! runs the plausibility validator over a few broken plans and shows what
//! it reports.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 04_plausibility
//! ```

use adcp_predictor::{
    predict_continuous, resolve, Burst, ConfigError, DeploymentConfig, PlausibilityValidator,
    SubsystemCode, Validator,
};

fn describe(name: &str, config: &DeploymentConfig, validator: &PlausibilityValidator) {
    let result = predict_continuous(config);
    println!("{}:", name);
    println!(
        "  Predicted range {:.1} m, {} ensembles, {:.1} Wh",
        result.profile_range_m, result.ensembles, result.total_wh
    );

    let report = validator.report(config);
    if report.is_empty() {
        println!("  ✓ Plausible");
    }
    for problem in report.iter() {
        println!("  ✗ {}", problem);
    }
    println!();
}

fn main() {
    println!("ADCP Plausibility Example");
    println!("=========================\n");

    let validator = PlausibilityValidator::strict();

    describe("Short-bin 300 kHz", &{
        let mut config = resolve(SubsystemCode::parse("4"), None);
        config.water_profile.num_bins = 12;
        config
    }, &validator);

    describe("Default bins past predicted range", &resolve(None, None), &validator);

    describe("38 kHz at 1 s", &resolve(SubsystemCode::parse("F"), None), &validator);

    describe("Below every table", &{
        let mut config = DeploymentConfig::default();
        config.transducer.frequency_hz = 20_000.0;
        config
    }, &validator);

    describe(
        "Burst longer than its interval",
        &DeploymentConfig::default().with_burst(Burst {
            ensembles_per_burst: 8192,
            burst_interval_s: 3600.0,
            ..Burst::default()
        }),
        &validator,
    );

    // First failure only, for callers that stop at one
    let mut config = DeploymentConfig::default();
    config.transducer.beams = 6;
    match PlausibilityValidator::default().validate(&config) {
        Ok(()) => println!("Six beams accepted?"),
        Err(ConfigError::UnsupportedBeamCount { beams }) => println!("Rejected {} beams", beams),
        Err(e) => println!("Rejected: {}", e),
    }
}
