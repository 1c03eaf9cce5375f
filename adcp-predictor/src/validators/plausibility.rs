//! Deployment plausibility validator
//!
//! Checks, in order:
//! - every numeric field is finite
//! - the beam count is one that exists
//! - a frequency table covers the frequency
//! - beam geometry, bins and pings are within physical limits
//! - sound speed, SNR and broadband beta are sensible
//! - interval and duration are positive
//! - the pings of one ensemble fit in the ensemble interval
//! - the ensembles of one burst fit in the burst interval
//! - the bins stay inside the predicted profiling range (strict only)
//! - a battery pack holds usable energy for the deployment

use heapless::Vec;

use crate::burst::predict_burst;
use crate::config::DeploymentConfig;
use crate::errors::{ConfigError, ValidationResult};
use crate::predict::range::predict_range;
use crate::sonar::SonarGeometry;
use crate::tables::LOWEST_TABLE_HZ;
use crate::traits::Validator;

use super::utils;

/// Most failures one report holds
pub const MAX_REPORTED_ERRORS: usize = 16;

/// Fixed-capacity list of every failed check
pub type PlausibilityReport = Vec<ConfigError, MAX_REPORTED_ERRORS>;

type Check = fn(&PlausibilityValidator, &DeploymentConfig) -> ValidationResult<()>;

/// Every float of `config` with its field name
pub fn numeric_fields(config: &DeploymentConfig) -> [(&'static str, f64); 19] {
    let xdcr = &config.transducer;
    let wp = &config.water_profile;
    [
        ("transducer.frequency_hz", xdcr.frequency_hz),
        ("transducer.beam_angle_deg", xdcr.beam_angle_deg),
        ("transducer.beam_diameter_m", xdcr.beam_diameter_m),
        ("transducer.cycles_per_element", xdcr.cycles_per_element),
        ("water_profile.bin_size_m", wp.bin_size_m),
        ("water_profile.blank_m", wp.blank_m),
        ("water_profile.time_between_pings_s", wp.time_between_pings_s),
        ("water_profile.lag_length_m", wp.lag_length_m),
        ("bottom_track.time_between_pings_s", config.bottom_track.time_between_pings_s),
        ("duration_days", config.duration_days),
        ("ensemble_interval_s", config.ensemble_interval_s),
        ("speed_of_sound_mps", config.speed_of_sound_mps),
        ("snr_db", config.snr_db),
        ("broadband_beta", config.broadband_beta),
        ("battery.rated_wh", config.battery.rated_wh),
        ("battery.derate", config.battery.derate),
        ("battery.self_discharge_wh_per_year", config.battery.self_discharge_wh_per_year),
        ("burst.burst_interval_s", config.burst.burst_interval_s),
        ("burst.sample_interval_s", config.burst.sample_interval_s),
    ]
}

/// Plausibility checks over a [`DeploymentConfig`]
///
/// Never alters a prediction; it only explains why one may be degenerate.
#[derive(Debug, Clone)]
pub struct PlausibilityValidator {
    max_frequency_hz: f64,
    max_beam_angle_deg: f64,
    max_beam_diameter_m: f64,
    max_bin_size_m: f64,
    max_bins: u32,
    max_blank_m: f64,
    max_pings: u32,
    max_duration_days: f64,
    max_ensemble_interval_s: f64,
    min_speed_of_sound_mps: f64,
    max_speed_of_sound_mps: f64,
    min_snr_db: f64,
    max_snr_db: f64,
    check_profile_range: bool,
}

impl Default for PlausibilityValidator {
    fn default() -> Self {
        Self {
            // Highest-frequency head is 1.2 MHz
            max_frequency_hz: 3_000_000.0,
            max_beam_angle_deg: 45.0,
            max_beam_diameter_m: 2.0,
            // Largest bin of the 38 kHz band is 32 m
            max_bin_size_m: 64.0,
            max_bins: 255,
            max_blank_m: 100.0,
            max_pings: 10_000,
            max_duration_days: 1825.0,
            max_ensemble_interval_s: 86_400.0,
            // Fresh water near freezing to warm salty water
            min_speed_of_sound_mps: 1400.0,
            max_speed_of_sound_mps: 1600.0,
            min_snr_db: -20.0,
            max_snr_db: 100.0,
            check_profile_range: false,
        }
    }
}

impl PlausibilityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(max_bin_size_m: f64, max_bins: u32, max_duration_days: f64) -> Self {
        Self {
            max_bin_size_m: libm::fabs(max_bin_size_m),
            max_bins: max_bins.max(1),
            max_duration_days: libm::fabs(max_duration_days),
            ..Self::default()
        }
    }

    /// Tighter limits for a typical coastal deployment, bins checked against range
    pub fn strict() -> Self {
        Self {
            max_beam_angle_deg: 30.0,
            max_bins: 200,
            max_duration_days: 730.0,
            min_speed_of_sound_mps: 1450.0,
            max_speed_of_sound_mps: 1550.0,
            check_profile_range: true,
            ..Self::default()
        }
    }

    /// Wide limits for lab and experimental setups
    pub fn lenient() -> Self {
        Self {
            max_frequency_hz: 5_000_000.0,
            max_beam_angle_deg: 60.0,
            max_bins: 1000,
            max_pings: 100_000,
            max_duration_days: 3650.0,
            max_ensemble_interval_s: 7.0 * 86_400.0,
            min_speed_of_sound_mps: 1300.0,
            max_speed_of_sound_mps: 1700.0,
            ..Self::default()
        }
    }

    const CHECKS: [Check; 10] = [
        Self::check_finite,
        Self::check_beams,
        Self::check_frequency,
        Self::check_geometry,
        Self::check_environment,
        Self::check_timing,
        Self::check_ensemble_overrun,
        Self::check_burst_overrun,
        Self::check_profile_range,
        Self::check_battery,
    ];

    /// First failure of every check, in check order
    pub fn report(&self, config: &DeploymentConfig) -> PlausibilityReport {
        let mut report = PlausibilityReport::new();
        for check in Self::CHECKS.iter() {
            if let Err(err) = check(self, config) {
                if report.push(err).is_err() {
                    break;
                }
            }
        }
        report
    }

    fn check_finite(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        numeric_fields(config)
            .iter()
            .try_for_each(|(field, value)| utils::check_finite(*field, *value))
    }

    fn check_beams(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        match config.transducer.beams {
            1 | 3 | 4 => Ok(()),
            beams => Err(ConfigError::UnsupportedBeamCount { beams }),
        }
    }

    fn check_frequency(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        let frequency_hz = config.transducer.frequency_hz;
        if frequency_hz < LOWEST_TABLE_HZ {
            return Err(ConfigError::BelowLowestTable { frequency_hz });
        }
        utils::check_range("transducer.frequency_hz", frequency_hz, LOWEST_TABLE_HZ, self.max_frequency_hz)
    }

    fn check_geometry(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        let xdcr = &config.transducer;
        let wp = &config.water_profile;

        utils::check_range("transducer.beam_angle_deg", xdcr.beam_angle_deg, 0.0, self.max_beam_angle_deg)?;
        utils::check_positive("transducer.beam_diameter_m", xdcr.beam_diameter_m, self.max_beam_diameter_m)?;
        utils::check_positive("transducer.cycles_per_element", xdcr.cycles_per_element, 64.0)?;

        if wp.enabled {
            utils::check_positive("water_profile.bin_size_m", wp.bin_size_m, self.max_bin_size_m)?;
            utils::check_range("water_profile.num_bins", f64::from(wp.num_bins), 1.0, f64::from(self.max_bins))?;
            utils::check_range("water_profile.blank_m", wp.blank_m, 0.0, self.max_blank_m)?;
            utils::check_range("water_profile.pings", f64::from(wp.pings), 1.0, f64::from(self.max_pings))?;
            utils::check_positive("water_profile.lag_length_m", wp.lag_length_m, self.max_bin_size_m)?;
        }
        if config.bottom_track.enabled {
            let pings = f64::from(config.bottom_track.pings);
            utils::check_range("bottom_track.pings", pings, 1.0, f64::from(self.max_pings))?;
        }
        Ok(())
    }

    fn check_environment(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        utils::check_range(
            "speed_of_sound_mps",
            config.speed_of_sound_mps,
            self.min_speed_of_sound_mps,
            self.max_speed_of_sound_mps,
        )?;
        utils::check_range("snr_db", config.snr_db, self.min_snr_db, self.max_snr_db)?;
        utils::check_positive("broadband_beta", config.broadband_beta, 1.0)
    }

    fn check_timing(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        utils::check_positive("ensemble_interval_s", config.ensemble_interval_s, self.max_ensemble_interval_s)?;
        utils::check_positive("duration_days", config.duration_days, self.max_duration_days)?;
        if config.burst.is_active() {
            utils::check_positive("burst.sample_interval_s", config.burst.sample_interval_s, self.max_ensemble_interval_s)?;
        }
        Ok(())
    }

    fn check_ensemble_overrun(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        let wp = &config.water_profile;
        let bt = &config.bottom_track;
        let mut required_s = 0.0;
        if wp.enabled {
            required_s += f64::from(wp.pings) * wp.time_between_pings_s;
        }
        if bt.enabled {
            required_s += f64::from(bt.pings) * bt.time_between_pings_s;
        }

        if required_s > config.ensemble_interval_s {
            Err(ConfigError::EnsembleOverrun {
                required_s,
                interval_s: config.ensemble_interval_s,
            })
        } else {
            Ok(())
        }
    }

    fn check_burst_overrun(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        let burst = predict_burst(config);
        if burst.burst_duration_s > config.burst.burst_interval_s {
            Err(ConfigError::BurstOverrun {
                required_s: burst.burst_duration_s,
                interval_s: config.burst.burst_interval_s,
            })
        } else {
            Ok(())
        }
    }

    fn check_profile_range(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        let wp = &config.water_profile;
        if !self.check_profile_range || !wp.enabled {
            return Ok(());
        }

        let range_m = predict_range(config, &SonarGeometry::from_config(config)).profile_range_m;
        let profile_m = wp.blank_m + f64::from(wp.num_bins) * wp.bin_size_m;
        if profile_m > range_m {
            Err(ConfigError::ProfileBeyondRange { profile_m, range_m })
        } else {
            Ok(())
        }
    }

    fn check_battery(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        if config.battery.usable_wh(config.duration_days) <= 0.0 {
            Err(ConfigError::NoBatteryCapacity)
        } else {
            Ok(())
        }
    }
}

impl Validator for PlausibilityValidator {
    type Value = DeploymentConfig;

    fn validate(&self, config: &DeploymentConfig) -> ValidationResult<()> {
        Self::CHECKS.iter().try_for_each(|check| check(self, config))
    }
}
