//! Basic Deployment Prediction Example
//!
//! Predicts a one-month deployment of the default 300 kHz head and prints
//! every quantity the engine produces.
//!
//! ## What You'll Learn
//!
//! - Resolving a configuration from a subsystem code
//! - Adjusting deployment fields with the `with_*` transformers
//! - Reading range, precision, data volume and the energy budget
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_prediction
//! ```

use adcp_predictor::{predict_continuous, resolve, BatteryType, SubsystemCode};

fn main() {
    println!("ADCP Basic Prediction Example");
    println!("=============================\n");

    // 300 kHz, 4 beams at 20°, 30 × 4 m bins
    let config = resolve(SubsystemCode::parse("4"), None)
        .with_duration_days(30.0)
        .with_ensemble_interval(60.0)
        .with_battery(BatteryType::Lithium);

    println!("Configuration:");
    println!("  Frequency:     {} Hz", config.transducer.frequency_hz);
    println!("  Beams:         {} at {}°", config.transducer.beams, config.transducer.beam_angle_deg);
    println!(
        "  Profile:       {} × {} m bins, {} m blank",
        config.water_profile.num_bins, config.water_profile.bin_size_m, config.water_profile.blank_m
    );
    println!("  Deployment:    {} days at {} s", config.duration_days, config.ensemble_interval_s);
    println!();

    let result = predict_continuous(&config);

    println!("Range:");
    println!("  Profiling:     {:.1} m", result.profile_range_m);
    println!("  Bottom track:  {:.1} m", result.bottom_track_range_m);
    println!();

    println!("Precision:");
    println!("  Velocity std:  {:.4} m/s", result.velocity_std_mps);
    println!("  Radial std:    {:.4} m/s", result.radial_std_mps);
    println!("  Max velocity:  {:.2} m/s", result.max_velocity_mps);
    println!();

    println!("Data:");
    println!("  Ensembles:     {}", result.ensembles);
    println!("  Ensemble size: {} bytes", result.ensemble_bytes);
    println!("  Total:         {:.1} MB", result.data_bytes as f64 / 1e6);
    println!();

    let power = &result.power;
    println!("Energy (Wh):");
    println!("  Transmit:      {:.3}", power.transmit_wh);
    println!("  Receive:       {:.3}", power.receive_wh);
    println!("  BT transmit:   {:.3}", power.bottom_track_transmit_wh);
    println!("  BT receive:    {:.3}", power.bottom_track_receive_wh);
    println!("  Wakeup/init/save: {:.3}", power.wakeup_wh + power.init_wh + power.save_wh);
    println!("  Sleep:         {:.3}", power.sleep_wh);
    println!("  Capacitor:     {:.3}", power.capacitor_wh);
    println!("  Total:         {:.2} Wh", result.total_wh);
    println!("  Battery packs: {:.2}", result.battery_packs);
}
