//! Integration tests for the continuous-mode engine
//!
//! Runs complete deployments through resolver and engine and checks the
//! quantities that are exact by construction, the zero guards, and the
//! physical orderings between bands and modes.

#![cfg(test)]

mod common;

use adcp_predictor::{
    predict_continuous, resolve, BatteryType, DeploymentConfig, SubsystemCode, TransmitMode,
};

use common::{assert_close, assert_well_formed, scenarios::Scenarios, variant, REL_TOL};

#[test]
fn test_scenario_counts_and_bytes() {
    for scenario in Scenarios::all() {
        let result = predict_continuous(&scenario.config);
        assert_eq!(result.ensembles, scenario.ensembles, "{}", scenario.name);
        assert_eq!(result.ensemble_bytes, scenario.ensemble_bytes, "{}", scenario.name);
        assert_eq!(
            result.data_bytes,
            scenario.ensembles * scenario.ensemble_bytes,
            "{}",
            scenario.name
        );
        assert_well_formed(&result);
    }
}

#[test]
fn test_default_300khz_day() {
    let result = predict_continuous(&resolve(None, None));

    assert_eq!(result.ensembles, 86_400);
    assert_eq!(result.ensemble_bytes, 4396);
    assert_eq!(result.bin_bytes, 30 * 112);
    assert_eq!(result.data_bytes, 86_400 * 4396);
    assert_eq!(result.time_between_pings_s, 0.0);

    // 307.2 kHz at 1/4 sampling
    assert_eq!(result.sonar.sample_rate_hz, 76_800.0);
    assert!(result.sonar.code_repeats >= 2);
    assert_eq!(result.sonar.lag_samples % 2, 0);
}

#[test]
fn test_every_variant_predicts() {
    for config in common::all_variants() {
        let result = predict_continuous(&config);
        assert_well_formed(&result);
        assert!(result.profile_range_m > 0.0, "{:?}", config.transducer);
        assert!(result.bottom_track_range_m > 0.0, "{:?}", config.transducer);
        assert!(result.total_wh > 0.0);
    }
}

#[test]
fn test_prediction_is_deterministic() {
    for config in common::all_variants() {
        let first = predict_continuous(&config);
        let second = predict_continuous(&config);
        assert_eq!(first, second);
        assert_eq!(first.total_wh.to_bits(), second.total_wh.to_bits());
    }
}

#[test]
fn test_lower_band_reaches_further() {
    let bands = ['2', '3', '4', 'D', 'E', 'F'];
    let ranges: Vec<f64> = bands
        .iter()
        .map(|c| predict_continuous(&variant(*c)).profile_range_m)
        .collect();
    for pair in ranges.windows(2) {
        assert!(pair[1] > pair[0], "ranges not increasing: {:?}", ranges);
    }
}

#[test]
fn test_narrowband_reaches_further() {
    for config in common::all_variants() {
        let broadband = predict_continuous(&config);
        let narrowband = predict_continuous(&config.with_transmit(TransmitMode::Narrowband));
        assert!(narrowband.profile_range_m > broadband.profile_range_m);
    }
}

#[test]
fn test_below_lowest_table() {
    let mut config = DeploymentConfig::default();
    config.transducer.frequency_hz = 30_000.0;
    let result = predict_continuous(&config);

    assert_eq!(result.profile_range_m, 0.0);
    assert_eq!(result.bottom_track_range_m, 0.0);
    assert_eq!(result.sonar.sample_rate_hz, 0.0);
    assert_eq!(result.power.transmit_wh, 0.0);
    // Bytes do not depend on the tables
    assert_eq!(result.ensemble_bytes, 4396);
    assert_well_formed(&result);
}

#[test]
fn test_zero_frequency() {
    let mut config = DeploymentConfig::default();
    config.transducer.frequency_hz = 0.0;
    let result = predict_continuous(&config);

    assert_eq!(result.sonar.wavelength_m, 0.0);
    assert_eq!(result.sonar.directivity_index_db, 0.0);
    assert_eq!(result.max_velocity_mps, 0.0);
    assert_well_formed(&result);
}

#[test]
fn test_zero_interval() {
    let config = DeploymentConfig::default().with_ensemble_interval(0.0);
    let result = predict_continuous(&config);

    assert_eq!(result.ensembles, 0);
    assert_eq!(result.data_bytes, 0);
    assert_eq!(result.power.wakeup_wh, 0.0);
    // Sleep still runs for the whole deployment
    assert!(result.power.sleep_wh > 0.0);
    assert_well_formed(&result);
}

#[test]
fn test_zero_bin_size() {
    let mut config = DeploymentConfig::default();
    config.water_profile.bin_size_m = 0.0;
    let result = predict_continuous(&config);

    assert_eq!(result.sonar.bin_samples, 0);
    assert_eq!(result.radial_std_mps, 0.0);
    assert_well_formed(&result);
}

#[test]
fn test_more_bins_more_bytes() {
    let mut config = DeploymentConfig::default();
    let mut last = predict_continuous(&config);
    for bins in [31, 50, 100, 200] {
        config.water_profile.num_bins = bins;
        let result = predict_continuous(&config);
        assert!(result.bin_bytes > last.bin_bytes);
        assert!(result.ensemble_bytes > last.ensemble_bytes);
        last = result;
    }
}

#[test]
fn test_multi_ping_timing() {
    let mut config = variant('D');
    config.water_profile.pings = 4;
    let result = predict_continuous(&config);
    assert_eq!(result.time_between_pings_s, 0.25);

    // Four pings cost four times the transmit energy of one
    let single = predict_continuous(&variant('D'));
    assert_close(result.power.transmit_wh, 4.0 * single.power.transmit_wh, REL_TOL);
}

#[test]
fn test_energy_scales_with_duration() {
    let day = predict_continuous(&DeploymentConfig::default());
    let month = predict_continuous(&DeploymentConfig::default().with_duration_days(30.0));
    assert_close(month.total_wh, 30.0 * day.total_wh, 1e-6);
}

#[test]
fn test_lithium_needs_fewer_packs() {
    let config = variant('E').with_duration_days(180.0).with_ensemble_interval(60.0);
    let alkaline = predict_continuous(&config);
    let lithium = predict_continuous(&config.with_battery(BatteryType::Lithium));
    assert_eq!(alkaline.total_wh, lithium.total_wh);
    assert!(lithium.battery_packs < alkaline.battery_packs);
}

#[test]
fn test_battery_without_capacity() {
    let config = DeploymentConfig::default().with_custom_battery(0.0, 0.85, 22.0);
    let result = predict_continuous(&config);
    assert_eq!(result.battery_packs, 0.0);
    assert!(result.total_wh > 0.0);
}

#[test]
fn test_vertical_beam_precision() {
    let result = predict_continuous(&resolve(SubsystemCode::parse("C"), None));
    assert_eq!(result.velocity_std_mps, result.radial_std_mps);
    assert_eq!(result.bin_bytes, 30 * 28);
}

#[test]
fn test_config_from_partial_json() {
    let json = r#"{ "duration_days": 30.0, "transmit": "Narrowband" }"#;
    let config: DeploymentConfig = serde_json::from_str(json).expect("parse");
    assert_eq!(config.duration_days, 30.0);
    assert_eq!(config.transmit, TransmitMode::Narrowband);
    // Missing sections keep their defaults
    assert_eq!(config.transducer, DeploymentConfig::default().transducer);
}
