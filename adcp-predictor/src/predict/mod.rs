//! Continuous-Mode Prediction Engine
//!
//! ## Overview
//!
//! One call takes a [`DeploymentConfig`] to a [`PredictionResult`]. The
//! engine is a straight pipeline of pure stages, each reading the
//! configuration plus what the earlier stages produced:
//!
//! ```text
//! config ─► SonarGeometry ─► range ─► precision ─► bytes ─► power ─► result
//!              λ, DI, fs       WP/BT     σ, Ua       ensemble   Wh, packs
//!              samples                               volume
//! ```
//!
//! ## Degenerate Input
//!
//! Nothing here returns an error. A zero interval, a frequency below every
//! table or a zero lag yields 0 for the quantities that depend on it, and
//! every other quantity is still computed. Run
//! [`crate::validators::PlausibilityValidator`] to learn why a result looks
//! empty.
//!
//! ## Data Volume
//!
//! When burst sampling is active the deployment's data volume is the burst
//! volume from [`crate::burst::predict_burst`]; otherwise it is ensembles ×
//! ensemble bytes.

pub mod bytes;
pub mod power;
pub mod precision;
pub mod range;

pub use power::PowerBudget;
pub use precision::Precision;
pub use range::RangePrediction;

use crate::burst::predict_burst;
use crate::config::DeploymentConfig;
use crate::sonar::SonarGeometry;
use crate::tables;

/// Everything predicted for a continuous deployment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionResult {
    /// Water-profiling range (m)
    pub profile_range_m: f64,
    /// Bottom-track range (m)
    pub bottom_track_range_m: f64,
    /// Ensemble velocity standard deviation (m/s)
    pub velocity_std_mps: f64,
    /// Single-beam velocity standard deviation (m/s)
    pub radial_std_mps: f64,
    /// Maximum unambiguous velocity (m/s)
    pub max_velocity_mps: f64,
    /// Bytes of one ensemble
    pub ensemble_bytes: u64,
    /// Bytes of the bins of one ensemble
    pub bin_bytes: u64,
    /// Ensembles over the deployment
    pub ensembles: u64,
    /// Data recorded over the deployment (bytes)
    pub data_bytes: u64,
    /// Energy breakdown
    pub power: PowerBudget,
    /// Energy over the deployment (Wh)
    pub total_wh: f64,
    /// Battery packs needed
    pub battery_packs: f64,
    /// Effective water-profile time between pings (s)
    pub time_between_pings_s: f64,
    /// Sonar intermediates
    pub sonar: SonarGeometry,
}

/// Predict a continuous deployment
pub fn predict_continuous(config: &DeploymentConfig) -> PredictionResult {
    let frequency = config.transducer.frequency_hz;
    match tables::selected(frequency) {
        Some(table) => {
            log_debug!("{} Hz uses the {} Hz table", frequency, table.frequency_hz);
        }
        None => {
            log_warn!(
                "{} Hz is below the lowest table ({} Hz), ranges will be zero",
                frequency,
                tables::LOWEST_TABLE_HZ
            );
        }
    }

    let sonar = SonarGeometry::from_config(config);
    let ranges = range::predict_range(config, &sonar);
    let precision = precision::predict_precision(config, &sonar);

    let ensemble_bytes = bytes::ensemble_bytes(config);
    let ensembles = bytes::ensembles(config);
    let data_bytes = if config.burst.is_active() {
        predict_burst(config).data_bytes
    } else {
        ensembles.saturating_mul(ensemble_bytes)
    };

    let power = power::predict_power(config, &sonar, ensembles, ranges.bottom_track_range_m);
    let total_wh = power.total_wh();

    log_debug!(
        "Range {:.1} m, BT {:.1} m, σ {:.4} m/s, {} ensembles × {} bytes, {:.2} Wh",
        ranges.profile_range_m,
        ranges.bottom_track_range_m,
        precision.velocity_std_mps,
        ensembles,
        ensemble_bytes,
        total_wh
    );

    PredictionResult {
        profile_range_m: ranges.profile_range_m,
        bottom_track_range_m: ranges.bottom_track_range_m,
        velocity_std_mps: precision.velocity_std_mps,
        radial_std_mps: precision.radial_std_mps,
        max_velocity_mps: precision.max_velocity_mps,
        ensemble_bytes,
        bin_bytes: bytes::bin_bytes(config),
        ensembles,
        data_bytes,
        power,
        total_wh,
        battery_packs: power::battery_packs(config, total_wh),
        time_between_pings_s: config.time_between_pings(),
        sonar,
    }
}
