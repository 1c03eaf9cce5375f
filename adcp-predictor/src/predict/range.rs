//! Profiling and Bottom-Track Range
//!
//! Range is scaled from the reference table by the difference in signal
//! level between the configured instrument and the reference one:
//!
//! ```text
//! rScale = cos θ / cos θₖ
//! dB     = 10·log10(bin / binₖ) + DI − DIₖ − 10·log10(CPEₖ / CPE)
//! WPₖ    = rScale · (rangeₖ + binₖ·dB + 20·binₖ·[narrowband])
//! BTₖ    = 2 · rScale · (rangeₖ + binₖ·dB + 15·binₖ·[long-range BT])
//! ```
//!
//! The water-profile range then takes a reduction for the transmit power of
//! the selected table relative to all tables:
//!
//! ```text
//! reduction = 10·log10(ΣselW / ΣallW) · Σsel binₖ + 1
//! ```

use crate::config::{BottomTrackMode, DeploymentConfig};
use crate::constants::acoustics::{
    BOTTOM_TRACK_RANGE_FACTOR, LONG_RANGE_BOTTOM_TRACK_BONUS_BINS, NARROWBAND_RANGE_BONUS_BINS,
    RANGE_REDUCTION_OFFSET_M,
};
use crate::sonar::{guarded_div, SonarGeometry};
use crate::tables::{self, FrequencyTable};

/// Predicted ranges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangePrediction {
    /// Water-profiling range (m)
    pub profile_range_m: f64,
    /// Bottom-track range (m)
    pub bottom_track_range_m: f64,
    /// Power reduction applied to the profiling range (m, usually negative)
    pub range_reduction_m: f64,
}

/// Ratio of vertical reach between the configured and reference beam angles
pub fn range_scale(beam_angle_deg: f64, table: &FrequencyTable) -> f64 {
    guarded_div(
        libm::cos(beam_angle_deg.to_radians()),
        libm::cos(table.beam_angle_deg.to_radians()),
    )
}

/// Signal level of the configuration relative to `table` (dB)
pub fn signal_gain_db(config: &DeploymentConfig, directivity_index_db: f64, table: &FrequencyTable) -> f64 {
    let bin = config.water_profile.bin_size_m;
    let cpe = config.transducer.cycles_per_element;
    if table.bin_m <= 0.0 || table.cycles_per_element <= 0.0 || cpe <= 0.0 || bin <= 0.0 {
        return 0.0;
    }

    10.0 * libm::log10(bin / table.bin_m) + directivity_index_db
        - table.directivity_index(config.speed_of_sound_mps)
        - 10.0 * libm::log10(table.cycles_per_element / cpe)
}

fn profile_contribution(config: &DeploymentConfig, directivity_index_db: f64, table: &FrequencyTable) -> f64 {
    let bonus = if config.is_narrowband() {
        NARROWBAND_RANGE_BONUS_BINS * table.bin_m
    } else {
        0.0
    };
    range_scale(config.transducer.beam_angle_deg, table)
        * (table.range_m + table.bin_m * signal_gain_db(config, directivity_index_db, table) + bonus)
}

fn bottom_track_contribution(config: &DeploymentConfig, directivity_index_db: f64, table: &FrequencyTable) -> f64 {
    let bonus = match config.bottom_track.mode {
        BottomTrackMode::NarrowbandLongRange => LONG_RANGE_BOTTOM_TRACK_BONUS_BINS * table.bin_m,
        BottomTrackMode::Broadband => 0.0,
    };
    BOTTOM_TRACK_RANGE_FACTOR
        * range_scale(config.transducer.beam_angle_deg, table)
        * (table.range_m + table.bin_m * signal_gain_db(config, directivity_index_db, table) + bonus)
}

/// Range lost to the selected table's share of transmit power (m)
///
/// 0 when either wattage sum is 0, which includes every frequency below
/// the lowest table.
pub fn range_reduction(frequency_hz: f64) -> f64 {
    let selected_watts = tables::weighted_sum(frequency_hz, |t| t.xmt_watts);
    let all_watts = tables::total(|t| t.xmt_watts);
    if selected_watts == 0.0 || all_watts == 0.0 {
        return 0.0;
    }

    let selected_bin = tables::weighted_sum(frequency_hz, |t| t.bin_m);
    10.0 * libm::log10(selected_watts / all_watts) * selected_bin + RANGE_REDUCTION_OFFSET_M
}

/// Profiling and bottom-track range of `config`
///
/// A disabled mode has zero range. Ranges never go negative.
pub fn predict_range(config: &DeploymentConfig, sonar: &SonarGeometry) -> RangePrediction {
    let frequency = config.transducer.frequency_hz;
    let di = sonar.directivity_index_db;
    let range_reduction_m = range_reduction(frequency);

    let profile_range_m = if config.water_profile.enabled {
        tables::weighted_sum(frequency, |t| profile_contribution(config, di, t)) + range_reduction_m
    } else {
        0.0
    };

    let bottom_track_range_m = if config.bottom_track.enabled {
        tables::weighted_sum(frequency, |t| bottom_track_contribution(config, di, t))
    } else {
        0.0
    };

    RangePrediction {
        profile_range_m: profile_range_m.max(0.0),
        bottom_track_range_m: bottom_track_range_m.max(0.0),
        range_reduction_m,
    }
}
