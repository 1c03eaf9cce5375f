//! Hardware Variant Sweep Example
//!
//! Resolves every hardware variant and compares range, precision and
//! energy side by side, broadband against narrowband.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_variant_sweep
//! ```

use adcp_predictor::{hardware::VARIANTS, predict_continuous, resolve, SubsystemCode, TransmitMode};

fn main() {
    println!("ADCP Variant Sweep");
    println!("==================\n");

    println!(
        "{:<4} {:<28} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Code", "Description", "BB rng m", "NB rng m", "BT rng m", "σ m/s", "Wh/day"
    );
    println!("{}", "-".repeat(88));

    for variant in VARIANTS.iter() {
        let config = resolve(Some(SubsystemCode(variant.code)), None).with_ensemble_interval(10.0);
        let broadband = predict_continuous(&config);
        let narrowband = predict_continuous(&config.with_transmit(TransmitMode::Narrowband));

        println!(
            "{:<4} {:<28} {:>10.1} {:>10.1} {:>10.1} {:>10.4} {:>10.2}",
            variant.code,
            variant.description,
            broadband.profile_range_m,
            narrowband.profile_range_m,
            broadband.bottom_track_range_m,
            broadband.velocity_std_mps,
            broadband.total_wh,
        );
    }
}
