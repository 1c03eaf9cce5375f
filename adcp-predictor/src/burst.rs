//! Burst (Waves) Prediction
//!
//! ## Overview
//!
//! Wave measurements record a burst of closely spaced ensembles, then sleep
//! until the next burst. Energy and data volume follow a simpler model than
//! continuous profiling, keyed on subsystem codes rather than the frequency
//! tables:
//!
//! ```text
//! bytes/burst = n · (652 + bins · 7·beams·4)
//! bursts      = round(deployment s / burst interval)
//! Wh/burst    = (2 + n·(0.00155·xmtW + sampleInterval·rcvW)) / 3600 + 24·sleepW
//! ```
//!
//! ## Power Classes
//!
//! Transmit power comes from the band of the pinging subsystem, scaled by the
//! fraction of a 4-beam head it drives (a vertical beam drives one of four).
//! Receive power comes from the total beams of primary plus secondary:
//!
//! | Beams | Class  | Receive W |
//! |-------|--------|-----------|
//! | ≤ 4   | 4-beam | 2.60      |
//! | 5     | 5-beam | 3.10      |
//! | 6–7   | 7-beam | 4.20      |
//! | ≥ 8   | 8-beam | 4.75      |
//!
//! Unknown codes draw no transmit power.

use crate::config::DeploymentConfig;
use crate::constants::bytes::BURST_ENSEMBLE_OVERHEAD_BYTES;
use crate::constants::power::{
    BURST_RECEIVE_WATTS_4_BEAM, BURST_RECEIVE_WATTS_5_BEAM, BURST_RECEIVE_WATTS_7_BEAM,
    BURST_RECEIVE_WATTS_8_BEAM, BURST_SLEEP_HOURS, BURST_TRANSMIT_SECONDS, BURST_WAKEUP_WATT_SECONDS,
    SLEEP_WATTS,
};
use crate::constants::time::SECONDS_PER_HOUR;
use crate::hardware::SubsystemCode;
use crate::predict::bytes::{bytes_per_bin, count_intervals};
use crate::predict::power::battery_packs;

/// Beams of a full transmit power class
const FULL_HEAD_BEAMS: f64 = 4.0;

/// Result of a burst-mode prediction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurstPredictionResult {
    /// Bytes recorded per burst
    pub bytes_per_burst: u64,
    /// Bursts over the deployment
    pub bursts: u64,
    /// Total data volume (bytes)
    pub data_bytes: u64,
    /// Time the ensembles of one burst take (s)
    pub burst_duration_s: f64,
    /// Transmit power of the pinging subsystem (W)
    pub transmit_watts: f64,
    /// Receive power of all beams (W)
    pub receive_watts: f64,
    /// Energy per burst (Wh)
    pub wh_per_burst: f64,
    /// Energy over the deployment (Wh)
    pub total_wh: f64,
    /// Battery packs needed
    pub battery_packs: f64,
}

/// Transmit power of the subsystem `code` while pinging (W)
pub fn transmit_watts(code: SubsystemCode) -> f64 {
    match code.band() {
        Some(band) => band.burst_xmt_watts() * f64::from(code.beams()) / FULL_HEAD_BEAMS,
        None => 0.0,
    }
}

/// Receive power for a system with `total_beams` beams (W)
pub fn receive_watts(total_beams: u8) -> f64 {
    match total_beams {
        0..=4 => BURST_RECEIVE_WATTS_4_BEAM,
        5 => BURST_RECEIVE_WATTS_5_BEAM,
        6 | 7 => BURST_RECEIVE_WATTS_7_BEAM,
        _ => BURST_RECEIVE_WATTS_8_BEAM,
    }
}

/// Energy of one burst of `ensembles` (Wh)
pub fn wh_per_burst(ensembles: u32, sample_interval_s: f64, transmit_watts: f64, receive_watts: f64) -> f64 {
    let n = f64::from(ensembles);
    (BURST_WAKEUP_WATT_SECONDS
        + n * (BURST_TRANSMIT_SECONDS * transmit_watts + sample_interval_s * receive_watts))
        / SECONDS_PER_HOUR
        + BURST_SLEEP_HOURS * SLEEP_WATTS
}

/// Beams the pinging subsystem records; the configured beams for an unknown code
fn recorded_beams(config: &DeploymentConfig) -> u8 {
    match config.burst.pinging().beams() {
        0 => config.transducer.beams,
        beams => beams,
    }
}

/// Bytes of one burst
pub fn bytes_per_burst(config: &DeploymentConfig) -> u64 {
    let bins = u64::from(config.water_profile.num_bins);
    let ensemble = bins
        .saturating_mul(bytes_per_bin(recorded_beams(config)))
        .saturating_add(BURST_ENSEMBLE_OVERHEAD_BYTES);
    u64::from(config.burst.ensembles_per_burst).saturating_mul(ensemble)
}

/// Burst-mode data volume and energy of `config`
///
/// Every quantity is zero when burst sampling is off.
pub fn predict_burst(config: &DeploymentConfig) -> BurstPredictionResult {
    let burst = &config.burst;
    if !burst.is_active() {
        return BurstPredictionResult::default();
    }

    let pinging = burst.pinging();
    let transmit_watts = transmit_watts(pinging);
    let receive_watts = receive_watts(burst.total_beams());
    if transmit_watts == 0.0 {
        log_warn!("No burst transmit class for subsystem '{}'", pinging.0);
    }

    let bytes_per_burst = bytes_per_burst(config);
    let bursts = count_intervals(config.deployment_seconds(), burst.burst_interval_s);
    let wh_per_burst = wh_per_burst(burst.ensembles_per_burst, burst.sample_interval_s, transmit_watts, receive_watts);
    let total_wh = wh_per_burst * bursts as f64;

    log_debug!(
        "Burst: {} bursts × {} bytes, {:.4} Wh/burst (xmt {} W, rcv {} W)",
        bursts, bytes_per_burst, wh_per_burst, transmit_watts, receive_watts
    );

    BurstPredictionResult {
        bytes_per_burst,
        bursts,
        data_bytes: bursts.saturating_mul(bytes_per_burst),
        burst_duration_s: f64::from(burst.ensembles_per_burst) * burst.sample_interval_s,
        transmit_watts,
        receive_watts,
        wh_per_burst,
        total_wh,
        battery_packs: battery_packs(config, total_wh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Burst;

    fn waves(ensembles: u32, interval_s: f64) -> DeploymentConfig {
        DeploymentConfig::default().with_burst(Burst {
            ensembles_per_burst: ensembles,
            burst_interval_s: interval_s,
            ..Burst::default()
        })
    }

    #[test]
    fn transmit_classes() {
        assert_eq!(transmit_watts(SubsystemCode('2')), 20.0);
        assert_eq!(transmit_watts(SubsystemCode('4')), 140.0);
        assert_eq!(transmit_watts(SubsystemCode('G')), 8000.0);
        // Vertical beam drives one of four
        assert_eq!(transmit_watts(SubsystemCode('C')), 35.0);
        assert_eq!(transmit_watts(SubsystemCode('x')), 0.0);
    }

    #[test]
    fn receive_classes() {
        assert_eq!(receive_watts(1), 2.60);
        assert_eq!(receive_watts(4), 2.60);
        assert_eq!(receive_watts(5), 3.10);
        assert_eq!(receive_watts(6), 4.20);
        assert_eq!(receive_watts(7), 4.20);
        assert_eq!(receive_watts(8), 4.75);
        assert_eq!(receive_watts(12), 4.75);
    }

    #[test]
    fn inactive_burst_is_all_zero() {
        assert_eq!(predict_burst(&waves(0, 3600.0)), BurstPredictionResult::default());
        assert_eq!(predict_burst(&waves(1024, 0.0)), BurstPredictionResult::default());
    }

    #[test]
    fn hourly_bursts_for_a_day() {
        let result = predict_burst(&waves(1024, 3600.0));
        assert_eq!(result.bursts, 24);
        // 652 + 30 × 112 = 4012 bytes per ensemble
        assert_eq!(result.bytes_per_burst, 1024 * 4012);
        assert_eq!(result.data_bytes, 24 * 1024 * 4012);
        assert_eq!(result.burst_duration_s, 512.0);
        assert!((result.total_wh - result.wh_per_burst * 24.0).abs() < 1e-9);
    }

    #[test]
    fn oversized_burst_saturates() {
        let mut config = waves(u32::MAX, 3600.0);
        config.water_profile.num_bins = u32::MAX;
        assert_eq!(bytes_per_burst(&config), u64::MAX);

        let result = predict_burst(&config);
        assert_eq!(result.data_bytes, u64::MAX);
    }

    #[test]
    fn energy_per_burst_formula() {
        let wh = wh_per_burst(1024, 0.5, 140.0, 2.6);
        let expected = (2.0 + 1024.0 * (0.00155 * 140.0 + 0.5 * 2.6)) / 3600.0 + 24.0 * 0.00125;
        assert!((wh - expected).abs() < 1e-12);
    }

    #[test]
    fn secondary_vertical_beam() {
        let mut config = waves(2048, 3600.0);
        config.burst.secondary = Some(SubsystemCode('C'));
        let primary = predict_burst(&config);
        assert_eq!(primary.receive_watts, 3.10);
        assert_eq!(primary.transmit_watts, 140.0);

        config.burst.ping_secondary = true;
        let vertical = predict_burst(&config);
        assert_eq!(vertical.transmit_watts, 35.0);
        // One-beam bins
        assert_eq!(vertical.bytes_per_burst, 2048 * (652 + 30 * 28));
    }
}
