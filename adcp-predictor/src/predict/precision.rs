//! Velocity Precision
//!
//! ## Broadband
//!
//! Precision comes from the correlation of repeated code elements. The
//! reference instrument reaches 0.034 m/s with a 118-sample lag, 14-sample
//! bins and correlation 0.5; everything else scales from there:
//!
//! ```text
//! ρ      = β·(N−1)/N / (1 + 10^(−SNR/10))      pulse-coherent
//!        = β                                   otherwise
//! σ_rad  = 0.034 · (118 / lag) · √(14 / binSamples) · (ρ / 0.5)^−2
//! σ      = σ_rad / (√pings · √2 · sin θ)       σ_rad for a vertical beam
//! Ua     = fs / (2·lag) · c / (2f)              (/ sin θ when slanted)
//! ```
//!
//! ## Narrowband
//!
//! Pulse-pair processing over the lag `Ta` the pulse needs to cross a bin:
//!
//! ```text
//! Ta     = 2·bin / c / cos θ
//! L      = ½·c·Ta
//! σ_rad  = 1.4 · c·λ / (8π·L) · √(1 + 36/10^(SNR/10) + 30/10^(2·SNR/10))
//! σ      = σ_rad / (sin θ · √2 · √pings)
//! Ua     = 1 / (2·Ta) · c / (2f)                (/ sin θ when slanted)
//! ```

use core::f64::consts::{PI, SQRT_2};

use crate::config::{DeploymentConfig, TransmitMode};
use crate::constants::acoustics::{
    BROADBAND_REFERENCE_BIN_SAMPLES, BROADBAND_REFERENCE_CORRELATION, BROADBAND_REFERENCE_LAG_SAMPLES,
    BROADBAND_REFERENCE_STD_MPS, NARROWBAND_FUDGE, NARROWBAND_SNR_COEFF_1, NARROWBAND_SNR_COEFF_2,
};
use crate::sonar::{guarded_div, SonarGeometry};

/// Predicted velocity precision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Precision {
    /// Standard deviation along one beam (m/s)
    pub radial_std_mps: f64,
    /// Standard deviation of the ensemble velocity (m/s)
    pub velocity_std_mps: f64,
    /// Largest velocity measured without ambiguity (m/s)
    pub max_velocity_mps: f64,
}

fn sin_angle(config: &DeploymentConfig) -> f64 {
    libm::sin(config.transducer.beam_angle_deg.to_radians())
}

/// Ambiguity velocity along the beam converted to horizontal velocity
fn horizontal_ambiguity(config: &DeploymentConfig, ambiguity_hz: f64) -> f64 {
    let radial = guarded_div(ambiguity_hz * config.speed_of_sound_mps, 2.0 * config.transducer.frequency_hz);
    if config.is_vertical() {
        radial
    } else {
        guarded_div(radial, sin_angle(config))
    }
}

/// Pulse-pair lag of a narrowband ping (s)
pub fn narrowband_lag_s(config: &DeploymentConfig) -> f64 {
    let cos_angle = libm::cos(config.transducer.beam_angle_deg.to_radians());
    guarded_div(
        guarded_div(2.0 * config.water_profile.bin_size_m, config.speed_of_sound_mps),
        cos_angle,
    )
}

/// Broadband code correlation
pub fn broadband_correlation(config: &DeploymentConfig, code_repeats: u32) -> f64 {
    let beta = config.broadband_beta;
    if !config.water_profile.pulse_coherent {
        return beta;
    }
    if code_repeats == 0 {
        return 0.0;
    }

    let n = f64::from(code_repeats);
    let noise = 1.0 + libm::pow(10.0, -config.snr_db / 10.0);
    beta * (n - 1.0) / n / noise
}

/// Broadband precision
pub fn broadband(config: &DeploymentConfig, sonar: &SonarGeometry) -> Precision {
    let lag = f64::from(sonar.lag_samples);
    let bin = f64::from(sonar.bin_samples);
    let rho = broadband_correlation(config, sonar.code_repeats);

    let radial_std_mps = if lag == 0.0 || bin == 0.0 || rho == 0.0 {
        0.0
    } else {
        BROADBAND_REFERENCE_STD_MPS
            * (BROADBAND_REFERENCE_LAG_SAMPLES / lag)
            * libm::sqrt(BROADBAND_REFERENCE_BIN_SAMPLES / bin)
            * libm::pow(rho / BROADBAND_REFERENCE_CORRELATION, -2.0)
    };

    let velocity_std_mps = if config.is_vertical() {
        radial_std_mps
    } else {
        let pings = f64::from(config.water_profile.pings);
        guarded_div(radial_std_mps, libm::sqrt(pings) * SQRT_2 * sin_angle(config))
    };

    let ambiguity_hz = guarded_div(sonar.sample_rate_hz, 2.0 * lag);

    Precision {
        radial_std_mps,
        velocity_std_mps,
        max_velocity_mps: horizontal_ambiguity(config, ambiguity_hz),
    }
}

/// Narrowband precision
///
/// The horizontal standard deviation divides by `sin θ` even for a vertical
/// beam, which guards to 0.
pub fn narrowband(config: &DeploymentConfig, sonar: &SonarGeometry) -> Precision {
    let c = config.speed_of_sound_mps;
    let lag_s = narrowband_lag_s(config);
    let pulse_m = 0.5 * c * lag_s;

    let snr = libm::pow(10.0, config.snr_db / 10.0);
    let snr_term = libm::sqrt(
        1.0 + guarded_div(NARROWBAND_SNR_COEFF_1, snr) + guarded_div(NARROWBAND_SNR_COEFF_2, snr * snr),
    );
    let radial_std_mps = NARROWBAND_FUDGE * guarded_div(c * sonar.wavelength_m, 8.0 * PI * pulse_m) * snr_term;

    let pings = f64::from(config.water_profile.pings);
    let velocity_std_mps = guarded_div(radial_std_mps, sin_angle(config) * SQRT_2 * libm::sqrt(pings));

    let ambiguity_hz = guarded_div(1.0, 2.0 * lag_s);

    Precision {
        radial_std_mps,
        velocity_std_mps,
        max_velocity_mps: horizontal_ambiguity(config, ambiguity_hz),
    }
}

/// Precision for the configured transmit mode
pub fn predict_precision(config: &DeploymentConfig, sonar: &SonarGeometry) -> Precision {
    match config.transmit {
        TransmitMode::Broadband => broadband(config, sonar),
        TransmitMode::Narrowband => narrowband(config, sonar),
    }
}
