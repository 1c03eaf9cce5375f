//! Burst (Waves) Sampling Example
//!
//! Plans a six-month waves deployment: one 2048-ensemble burst every hour
//! at 2 Hz, first with a 4-beam head alone, then with a vertical fifth beam.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_burst_waves
//! ```

use adcp_predictor::{predict_burst, predict_continuous, resolve, BatteryType, Burst, SubsystemCode};

fn main() {
    println!("ADCP Waves Burst Example");
    println!("========================\n");

    let base = resolve(SubsystemCode::parse("3"), None)
        .with_duration_days(182.0)
        .with_battery(BatteryType::Lithium);

    let four_beam = Burst {
        ensembles_per_burst: 2048,
        burst_interval_s: 3600.0,
        sample_interval_s: 0.5,
        primary: SubsystemCode('3'),
        secondary: None,
        ping_secondary: false,
    };
    let five_beam = Burst {
        secondary: Some(SubsystemCode('B')),
        ..four_beam
    };
    let vertical_pinging = Burst {
        ping_secondary: true,
        ..five_beam
    };

    for (name, burst) in [
        ("4-beam", four_beam),
        ("5-beam, slanted pinging", five_beam),
        ("5-beam, vertical pinging", vertical_pinging),
    ] {
        let config = base.with_burst(burst);
        let result = predict_burst(&config);

        println!("{}:", name);
        println!("  Transmit / receive: {} W / {} W", result.transmit_watts, result.receive_watts);
        println!("  Burst length:       {} s", result.burst_duration_s);
        println!("  Bursts:             {}", result.bursts);
        println!("  Bytes per burst:    {}", result.bytes_per_burst);
        println!("  Total data:         {:.1} MB", result.data_bytes as f64 / 1e6);
        println!("  Energy per burst:   {:.4} Wh", result.wh_per_burst);
        println!("  Total energy:       {:.1} Wh", result.total_wh);
        println!("  Battery packs:      {:.2}", result.battery_packs);

        // The continuous engine reports the burst volume once burst mode is on
        let continuous = predict_continuous(&config);
        assert_eq!(continuous.data_bytes, result.data_bytes);
        println!();
    }
}
