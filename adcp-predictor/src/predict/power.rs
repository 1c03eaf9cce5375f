//! Energy Budget
//!
//! ## Overview
//!
//! Energy is accounted per ensemble event and multiplied out over the
//! deployment. All terms are watt-hours.
//!
//! ```text
//! transmit   = xmtTime · ΣselW · duty · beams · ensembles · pings / 3600
//! receive    = rcvTime · 3 W · ensembles · pings / 3600        (×2 above 700 kHz)
//! BT xmt     = 0.1·rcvBT · ΣselW · duty · beams · ensembles · btPings / 3600
//! BT receive = rcvBT · 3 W · ensembles · btPings / 3600         (×2 above 600 kHz)
//! events     = ensembles · (0.4 W·0.4 s + 2.8 W·0.25 s + 1.8 W·0.15 s) / 3600
//! sleep      = 0.00125 W · hours
//! capacitor  = 0.03 · (BT xmt + transmit) + 1.3 · hours · ΣselV · 1e-6 · ΣselLeak
//! ```
//!
//! where
//!
//! ```text
//! xmtTime = codeRepeats · lagSamples / fs     broadband
//!         = Ta                                narrowband
//! rcvTime = (blank + bins·bin) / (m/sample) / fs
//! rcvBT   = 2 · btRange / (c · cos θ)
//! ```
//!
//! A disabled mode contributes no transmit or receive energy.

use crate::config::{BottomTrackMode, DeploymentConfig, TransmitMode};
use crate::constants::acoustics::{DUAL_BOTTOM_TRACK_RECEIVE_THRESHOLD_HZ, DUAL_RECEIVE_THRESHOLD_HZ};
use crate::constants::power::{
    BOTTOM_TRACK_PULSE_FRACTION, BROADBAND_DUTY_CYCLE, CAPACITOR_LEAKAGE_FACTOR,
    CAPACITOR_RECHARGE_FACTOR, INIT_SECONDS, INIT_WATTS, MICRO, NARROWBAND_DUTY_CYCLE,
    RECEIVE_WATTS, SAVE_SECONDS, SAVE_WATTS, SLEEP_WATTS, WAKEUP_SECONDS, WAKEUP_WATTS,
};
use crate::constants::time::SECONDS_PER_HOUR;
use crate::predict::precision::narrowband_lag_s;
use crate::sonar::{guarded_div, SonarGeometry};
use crate::tables;

/// Energy consumed by each part of the instrument (Wh)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBudget {
    /// Water-profile transmit
    pub transmit_wh: f64,
    /// Water-profile receive
    pub receive_wh: f64,
    /// Bottom-track transmit
    pub bottom_track_transmit_wh: f64,
    /// Bottom-track receive
    pub bottom_track_receive_wh: f64,
    /// Wakeup per ensemble
    pub wakeup_wh: f64,
    /// Initialization per ensemble
    pub init_wh: f64,
    /// Saving each ensemble
    pub save_wh: f64,
    /// Sleeping between ensembles
    pub sleep_wh: f64,
    /// Transmit capacitor recharge and leakage
    pub capacitor_wh: f64,
}

impl PowerBudget {
    /// Sum of every term (Wh)
    pub fn total_wh(&self) -> f64 {
        self.transmit_wh
            + self.receive_wh
            + self.bottom_track_transmit_wh
            + self.bottom_track_receive_wh
            + self.wakeup_wh
            + self.init_wh
            + self.save_wh
            + self.sleep_wh
            + self.capacitor_wh
    }
}

/// Length of one water-profile transmit pulse (s)
pub fn transmit_time_s(config: &DeploymentConfig, sonar: &SonarGeometry) -> f64 {
    match config.transmit {
        TransmitMode::Broadband => guarded_div(
            f64::from(sonar.code_repeats) * f64::from(sonar.lag_samples),
            sonar.sample_rate_hz,
        ),
        TransmitMode::Narrowband => narrowband_lag_s(config),
    }
}

/// Time spent receiving one water-profile ping (s)
pub fn receive_time_s(config: &DeploymentConfig, sonar: &SonarGeometry) -> f64 {
    let wp = &config.water_profile;
    let profile_m = wp.blank_m + f64::from(wp.num_bins) * wp.bin_size_m;
    guarded_div(guarded_div(profile_m, sonar.meters_per_sample), sonar.sample_rate_hz)
}

/// Time spent receiving one bottom-track ping (s)
pub fn bottom_track_receive_time_s(config: &DeploymentConfig, bottom_track_range_m: f64) -> f64 {
    let cos_angle = libm::cos(config.transducer.beam_angle_deg.to_radians());
    guarded_div(2.0 * bottom_track_range_m, config.speed_of_sound_mps * cos_angle)
}

/// Battery packs needed for `total_wh`; 0 when a pack holds nothing usable
pub fn battery_packs(config: &DeploymentConfig, total_wh: f64) -> f64 {
    let usable = config.battery.usable_wh(config.duration_days);
    if usable <= 0.0 {
        return 0.0;
    }
    total_wh / usable
}

/// Energy budget over the whole deployment
pub fn predict_power(
    config: &DeploymentConfig,
    sonar: &SonarGeometry,
    ensembles: u64,
    bottom_track_range_m: f64,
) -> PowerBudget {
    let frequency = config.transducer.frequency_hz;
    let ensembles = ensembles as f64;
    let hours = config.deployment_hours();
    let beams = f64::from(config.transducer.beams);

    let selected_watts = tables::weighted_sum(frequency, |t| t.xmt_watts);
    let selected_volts = tables::weighted_sum(frequency, |t| t.xmt_volts);
    let selected_leakage = tables::weighted_sum(frequency, |t| t.leakage_ua);

    let (transmit_wh, receive_wh) = if config.water_profile.enabled {
        let pings = f64::from(config.water_profile.pings);
        let duty = match config.transmit {
            TransmitMode::Broadband => BROADBAND_DUTY_CYCLE,
            TransmitMode::Narrowband => NARROWBAND_DUTY_CYCLE,
        };
        let receivers = if frequency > DUAL_RECEIVE_THRESHOLD_HZ { 2.0 } else { 1.0 };

        let xmt = transmit_time_s(config, sonar) * selected_watts * duty * beams * ensembles * pings
            / SECONDS_PER_HOUR;
        let rcv = receive_time_s(config, sonar) * RECEIVE_WATTS * receivers * ensembles * pings
            / SECONDS_PER_HOUR;
        (xmt, rcv)
    } else {
        (0.0, 0.0)
    };

    let (bottom_track_transmit_wh, bottom_track_receive_wh) = if config.bottom_track.enabled {
        let pings = f64::from(config.bottom_track.pings);
        let duty = match config.bottom_track.mode {
            BottomTrackMode::Broadband => BROADBAND_DUTY_CYCLE,
            BottomTrackMode::NarrowbandLongRange => NARROWBAND_DUTY_CYCLE,
        };
        let receivers = if frequency > DUAL_BOTTOM_TRACK_RECEIVE_THRESHOLD_HZ { 2.0 } else { 1.0 };
        let rcv_time = bottom_track_receive_time_s(config, bottom_track_range_m);
        let xmt_time = BOTTOM_TRACK_PULSE_FRACTION * rcv_time;

        let xmt = xmt_time * selected_watts * duty * beams * ensembles * pings / SECONDS_PER_HOUR;
        let rcv = rcv_time * RECEIVE_WATTS * receivers * ensembles * pings / SECONDS_PER_HOUR;
        (xmt, rcv)
    } else {
        (0.0, 0.0)
    };

    let capacitor_wh = CAPACITOR_RECHARGE_FACTOR * (bottom_track_transmit_wh + transmit_wh)
        + CAPACITOR_LEAKAGE_FACTOR * hours * selected_volts * MICRO * selected_leakage;

    PowerBudget {
        transmit_wh,
        receive_wh,
        bottom_track_transmit_wh,
        bottom_track_receive_wh,
        wakeup_wh: ensembles * WAKEUP_WATTS * WAKEUP_SECONDS / SECONDS_PER_HOUR,
        init_wh: ensembles * INIT_WATTS * INIT_SECONDS / SECONDS_PER_HOUR,
        save_wh: ensembles * SAVE_WATTS * SAVE_SECONDS / SECONDS_PER_HOUR,
        sleep_wh: SLEEP_WATTS * hours,
        capacitor_wh,
    }
}
