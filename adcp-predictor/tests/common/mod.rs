//! Common test utilities for integration tests
//!
//! This module provides:
//! - Configuration fixtures for every hardware band
//! - Float assertion helpers with relative tolerance
//! - Pre-built deployment scenarios with expected outcomes

#![allow(dead_code)]

use adcp_predictor::{
    hardware::VARIANTS, resolve, Burst, DeploymentConfig, PredictionResult, SubsystemCode,
};

pub mod scenarios;

/// Relative tolerance for derived floating-point quantities
pub const REL_TOL: f64 = 1e-9;

/// Assert `actual` is within `rel` of `expected`, relative to its magnitude
pub fn assert_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel * scale,
        "expected {} ± {}, got {}",
        expected,
        rel * scale,
        actual
    );
}

/// Assert every float of a prediction is finite and non-negative where it must be
pub fn assert_well_formed(result: &PredictionResult) {
    let floats = [
        ("profile_range_m", result.profile_range_m),
        ("bottom_track_range_m", result.bottom_track_range_m),
        ("velocity_std_mps", result.velocity_std_mps),
        ("radial_std_mps", result.radial_std_mps),
        ("max_velocity_mps", result.max_velocity_mps),
        ("total_wh", result.total_wh),
        ("battery_packs", result.battery_packs),
        ("time_between_pings_s", result.time_between_pings_s),
        ("wavelength_m", result.sonar.wavelength_m),
        ("directivity_index_db", result.sonar.directivity_index_db),
        ("sample_rate_hz", result.sonar.sample_rate_hz),
        ("meters_per_sample", result.sonar.meters_per_sample),
    ];
    for (name, value) in floats {
        assert!(value.is_finite(), "{} is not finite: {}", name, value);
    }
    assert!(result.profile_range_m >= 0.0);
    assert!(result.bottom_track_range_m >= 0.0);
    assert!(result.total_wh >= 0.0);
}

/// Configuration for a variant code
pub fn variant(code: char) -> DeploymentConfig {
    resolve(Some(SubsystemCode(code)), None)
}

/// Configuration for every continuous-mode variant
pub fn all_variants() -> impl Iterator<Item = DeploymentConfig> {
    VARIANTS.iter().map(|v| variant(v.code))
}

/// Hourly waves bursts on top of `config`
pub fn hourly_waves(config: &DeploymentConfig, ensembles_per_burst: u32) -> DeploymentConfig {
    config.with_burst(Burst {
        ensembles_per_burst,
        burst_interval_s: 3600.0,
        ..Burst::default()
    })
}
