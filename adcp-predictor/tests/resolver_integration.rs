//! Integration tests for the configuration resolver
//!
//! Every variant is resolved through both scopes and through every other
//! variant, so no band default can leak from one head to the next.

#![cfg(test)]

mod common;

use adcp_predictor::{
    apply_variant, hardware::VARIANTS, resolve, ConfigOverrides, DeploymentConfig, ResolveScope,
    SubsystemCode,
};

#[test]
fn test_scopes_share_geometry() {
    let base = DeploymentConfig::default();
    for v in VARIANTS.iter() {
        let code = SubsystemCode(v.code);
        let geometry = apply_variant(&base, code, ResolveScope::Geometry);
        let full = apply_variant(&base, code, ResolveScope::Full);

        assert_eq!(geometry.transducer.frequency_hz, full.transducer.frequency_hz);
        assert_eq!(geometry.transducer.beams, full.transducer.beams);
        assert_eq!(geometry.transducer.beam_angle_deg, full.transducer.beam_angle_deg);
        assert_eq!(geometry.transducer.beam_diameter_m, full.transducer.beam_diameter_m);
    }
}

#[test]
fn test_no_stale_defaults_between_variants() {
    for from in VARIANTS.iter() {
        let start = common::variant(from.code);
        for to in VARIANTS.iter() {
            let switched = apply_variant(&start, SubsystemCode(to.code), ResolveScope::Full);
            assert_eq!(
                switched,
                common::variant(to.code),
                "switching {} -> {}",
                from.code,
                to.code
            );
        }
    }
}

#[test]
fn test_variant_sets_band_defaults() {
    let config = common::variant('2');
    assert_eq!(config.transducer.frequency_hz, 1_228_800.0);
    assert_eq!(config.transducer.beam_diameter_m, 0.0254);
    assert_eq!(config.water_profile.bin_size_m, 1.0);
    assert_eq!(config.water_profile.num_bins, 20);
    assert_eq!(config.water_profile.blank_m, 0.10);
    assert_eq!(config.water_profile.time_between_pings_s, 0.02);
    assert_eq!(config.bottom_track.time_between_pings_s, 0.02);

    let vertical = common::variant('K');
    assert_eq!(vertical.transducer.beams, 1);
    assert_eq!(vertical.transducer.beam_angle_deg, 0.0);
    assert_eq!(vertical.transducer.frequency_hz, 38_400.0);
    assert!(vertical.is_vertical());
}

#[test]
fn test_empty_and_unknown_codes() {
    let default = DeploymentConfig::default();
    assert_eq!(resolve(SubsystemCode::parse(""), None), default);
    assert_eq!(resolve(None, None), default);

    // Unknown keeps the prior values
    assert_eq!(resolve(Some(SubsystemCode('#')), None), default);
    let prior = common::variant('P');
    assert_eq!(apply_variant(&prior, SubsystemCode('#'), ResolveScope::Full), prior);
}

#[test]
fn test_overrides_after_variant() {
    let overrides = ConfigOverrides {
        frequency_hz: Some(600_000.0),
        pings: Some(5),
        bt_time_between_pings_s: Some(0.3),
        ..ConfigOverrides::default()
    };
    let config = resolve(SubsystemCode::parse("4"), Some(&overrides));

    assert_eq!(config.transducer.frequency_hz, 600_000.0);
    assert_eq!(config.water_profile.pings, 5);
    assert_eq!(config.bottom_track.pings, 5);
    assert_eq!(config.bottom_track.time_between_pings_s, 0.3);
    // Not overridden
    assert_eq!(config.transducer.beam_diameter_m, 0.1016);
}

#[test]
fn test_resolver_leaves_deployment_fields() {
    let config = DeploymentConfig::default().with_duration_days(45.0);
    let switched = apply_variant(&config, SubsystemCode('M'), ResolveScope::Full);
    assert_eq!(switched.duration_days, 45.0);
    assert_eq!(switched.battery, config.battery);
}

#[test]
fn test_overrides_from_json() {
    let overrides: ConfigOverrides = serde_json::from_str(r#"{ "num_bins": 80 }"#).expect("parse");
    assert_eq!(overrides.num_bins, Some(80));
    assert!(overrides.bin_size_m.is_none());
}
