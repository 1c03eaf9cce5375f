//! Ensemble Size and Data Volume
//!
//! ```text
//! ensemble = 112 + bins·(7·beams·4)   water profile on
//!          + 384                      bottom track on
//!          + 504                      either on
//!          + 136                      both off
//!          + 4 + 32                   checksum, wrapper
//! ```

use crate::config::DeploymentConfig;
use crate::constants::bytes::{
    BOTTOM_TRACK_BYTES, BYTES_PER_VALUE, CHECKSUM_BYTES, GENERAL_OVERHEAD_BYTES, NO_PING_BYTES,
    PROFILE_DATA_SETS, PROFILE_OVERHEAD_BYTES, WRAPPER_BYTES,
};
use crate::sonar::guarded_div;

/// Bytes one bin adds across every profile data set
pub fn bytes_per_bin(beams: u8) -> u64 {
    PROFILE_DATA_SETS * u64::from(beams) * BYTES_PER_VALUE
}

/// Bytes of all bins of one ensemble; 0 with water profile off
pub fn bin_bytes(config: &DeploymentConfig) -> u64 {
    if !config.water_profile.enabled {
        return 0;
    }
    bytes_per_bin(config.transducer.beams).saturating_mul(u64::from(config.water_profile.num_bins))
}

/// Bytes of one ensemble
pub fn ensemble_bytes(config: &DeploymentConfig) -> u64 {
    let wp = config.water_profile.enabled;
    let bt = config.bottom_track.enabled;

    let mut bytes = CHECKSUM_BYTES + WRAPPER_BYTES;
    if wp {
        bytes = bytes.saturating_add(PROFILE_OVERHEAD_BYTES.saturating_add(bin_bytes(config)));
    }
    if bt {
        bytes += BOTTOM_TRACK_BYTES;
    }
    if wp || bt {
        bytes += GENERAL_OVERHEAD_BYTES;
    } else {
        bytes += NO_PING_BYTES;
    }
    bytes
}

/// Number of `interval_s` periods in `seconds`, rounded; 0 for a zero interval
pub fn count_intervals(seconds: f64, interval_s: f64) -> u64 {
    // `as` saturates: negative and NaN become 0
    libm::round(guarded_div(seconds, interval_s)) as u64
}

/// Ensembles recorded over the deployment
pub fn ensembles(config: &DeploymentConfig) -> u64 {
    count_intervals(config.deployment_seconds(), config.ensemble_interval_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_beam_bin_is_112_bytes() {
        assert_eq!(bytes_per_bin(4), 112);
        assert_eq!(bytes_per_bin(1), 28);
    }

    #[test]
    fn largest_geometry_does_not_overflow() {
        let mut config = DeploymentConfig::default();
        config.transducer.beams = u8::MAX;
        config.water_profile.num_bins = u32::MAX;
        let bins = bin_bytes(&config);
        assert_eq!(bins, bytes_per_bin(u8::MAX) * u64::from(u32::MAX));
        assert!(ensemble_bytes(&config) > bins);
    }

    #[test]
    fn default_ensemble_size() {
        // 112 + 30 × 112 + 384 + 504 + 4 + 32
        assert_eq!(ensemble_bytes(&DeploymentConfig::default()), 4396);
    }

    #[test]
    fn no_ping_ensemble() {
        let mut config = DeploymentConfig::default();
        config.water_profile.enabled = false;
        config.bottom_track.enabled = false;
        assert_eq!(ensemble_bytes(&config), 136 + 4 + 32);
        assert_eq!(bin_bytes(&config), 0);
    }

    #[test]
    fn bottom_track_only() {
        let mut config = DeploymentConfig::default();
        config.water_profile.enabled = false;
        assert_eq!(ensemble_bytes(&config), 384 + 504 + 4 + 32);
    }

    #[test]
    fn ensembles_round_and_guard() {
        let config = DeploymentConfig::default();
        assert_eq!(ensembles(&config), 86_400);
        assert_eq!(count_intervals(86_400.0, 0.0), 0);
        assert_eq!(count_intervals(10.0, 4.0), 3);
        assert_eq!(count_intervals(-10.0, 1.0), 0);
    }
}
