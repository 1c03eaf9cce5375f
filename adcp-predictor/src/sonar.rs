//! Shared Sonar-Equation Helpers
//!
//! Pure functions used by every engine. Each one guards its own
//! denominators: a zero frequency, sample rate or lag produces 0 rather than
//! NaN or infinity, so a half-edited configuration still predicts.
//!
//! ```text
//! λ            = c / f
//! DI           = 20·log10(π·D / λ)
//! fs           = f × Σ samplingₖ·selectₖ
//! m/sample     = cos θ · c / 2 / fs
//! bin samples  = ⌊bin / (m/sample)⌋
//! lag samples  = 2·⌊(⌊lag / (m/sample)⌋ + 1) / 2⌋      (always even)
//! code repeats = max(⌊bin samples / lag samples⌋ + 1, 2)
//! ```

use core::f64::consts::PI;

use crate::config::DeploymentConfig;
use crate::constants::acoustics::MIN_CODE_REPEATS;
use crate::tables;

/// `numerator / denominator`, or 0 when the denominator is 0
pub fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Acoustic wavelength (m); 0 when the frequency is 0
pub fn wavelength(speed_of_sound_mps: f64, frequency_hz: f64) -> f64 {
    guarded_div(speed_of_sound_mps, frequency_hz)
}

/// Directivity index of a piston transducer (dB)
///
/// 0 when the wavelength or the diameter is not positive, or the aperture
/// ratio is not a finite positive number.
pub fn directivity_index(beam_diameter_m: f64, wavelength_m: f64) -> f64 {
    if wavelength_m <= 0.0 || beam_diameter_m <= 0.0 {
        return 0.0;
    }
    let aperture = PI * beam_diameter_m / wavelength_m;
    if aperture <= 0.0 || !aperture.is_finite() {
        return 0.0;
    }
    20.0 * libm::log10(aperture)
}

/// Receiver sample rate (Hz)
pub fn sample_rate(frequency_hz: f64) -> f64 {
    frequency_hz * tables::weighted_sum(frequency_hz, |t| t.sampling)
}

/// Vertical meters covered by one sample; 0 when the sample rate is 0
pub fn meters_per_sample(beam_angle_deg: f64, speed_of_sound_mps: f64, sample_rate_hz: f64) -> f64 {
    if sample_rate_hz == 0.0 {
        return 0.0;
    }
    libm::cos(beam_angle_deg.to_radians()) * speed_of_sound_mps / 2.0 / sample_rate_hz
}

/// Samples in one bin
pub fn bin_samples(bin_size_m: f64, meters_per_sample: f64) -> u32 {
    if meters_per_sample == 0.0 {
        return 0;
    }
    // `as` saturates: negative and NaN become 0
    libm::trunc(bin_size_m / meters_per_sample) as u32
}

/// Samples in one broadband lag, rounded to an even count
pub fn lag_samples(lag_length_m: f64, meters_per_sample: f64) -> u32 {
    if meters_per_sample == 0.0 {
        return 0;
    }
    let raw = libm::trunc(lag_length_m / meters_per_sample) as u32;
    2 * ((raw.saturating_add(1)) / 2)
}

/// Repeats of the broadband code within one bin
pub fn code_repeats(bin_samples: u32, lag_samples: u32) -> u32 {
    if lag_samples == 0 {
        return 0;
    }
    (bin_samples / lag_samples + 1).max(MIN_CODE_REPEATS)
}

/// Intermediate sonar quantities for one configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SonarGeometry {
    /// Acoustic wavelength (m)
    pub wavelength_m: f64,
    /// Directivity index of the configured transducer (dB)
    pub directivity_index_db: f64,
    /// Receiver sample rate (Hz)
    pub sample_rate_hz: f64,
    /// Vertical meters per sample
    pub meters_per_sample: f64,
    /// Samples per bin
    pub bin_samples: u32,
    /// Samples per broadband lag
    pub lag_samples: u32,
    /// Broadband code repeats per bin
    pub code_repeats: u32,
}

impl SonarGeometry {
    /// Derive every sonar intermediate from a configuration
    pub fn from_config(config: &DeploymentConfig) -> Self {
        let c = config.speed_of_sound_mps;
        let xdcr = &config.transducer;

        let wavelength_m = wavelength(c, xdcr.frequency_hz);
        let directivity_index_db = directivity_index(xdcr.beam_diameter_m, wavelength_m);
        let sample_rate_hz = sample_rate(xdcr.frequency_hz);
        let meters_per_sample = meters_per_sample(xdcr.beam_angle_deg, c, sample_rate_hz);
        let bin_samples = bin_samples(config.water_profile.bin_size_m, meters_per_sample);
        let lag_samples = lag_samples(config.water_profile.lag_length_m, meters_per_sample);
        let code_repeats = code_repeats(bin_samples, lag_samples);

        log_trace!(
            "fs {} Hz, {:.5} m/sample, {} bin samples, {} lag samples, {} repeats",
            sample_rate_hz,
            meters_per_sample,
            bin_samples,
            lag_samples,
            code_repeats
        );

        Self {
            wavelength_m,
            directivity_index_db,
            sample_rate_hz,
            meters_per_sample,
            bin_samples,
            lag_samples,
            code_repeats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frequency_is_guarded() {
        let lambda = wavelength(1490.0, 0.0);
        assert_eq!(lambda, 0.0);
        assert_eq!(directivity_index(0.1016, lambda), 0.0);
        assert_eq!(sample_rate(0.0), 0.0);
    }

    #[test]
    fn directivity_of_300khz_piston() {
        let lambda = wavelength(1490.0, 307_200.0);
        let di = directivity_index(0.1016, lambda);
        // π·0.1016 / 0.00485 ≈ 65.8 → ≈ 36.4 dB
        assert!(di > 36.0 && di < 37.0, "DI = {}", di);
    }

    #[test]
    fn sample_rate_uses_selected_fraction() {
        assert_eq!(sample_rate(307_200.0), 76_800.0);
        assert_eq!(sample_rate(1_228_800.0), 230_400.0);
        assert_eq!(sample_rate(20_000.0), 0.0);
    }

    #[test]
    fn meters_per_sample_guarded() {
        assert_eq!(meters_per_sample(20.0, 1490.0, 0.0), 0.0);
        let mps = meters_per_sample(0.0, 1490.0, 745.0);
        assert!((mps - 1.0).abs() < 1e-12);
    }

    #[test]
    fn lag_samples_are_even() {
        // 1 m at 0.1 m/sample → 10 → (10 + 1) / 2 * 2 = 10
        assert_eq!(lag_samples(1.0, 0.1), 10);
        // 1.15 m → 11 → 12
        assert_eq!(lag_samples(1.15, 0.1), 12);
        assert_eq!(lag_samples(1.0, 0.0), 0);
    }

    #[test]
    fn bin_samples_truncate() {
        assert_eq!(bin_samples(4.0, 0.3), 13);
        assert_eq!(bin_samples(4.0, 0.0), 0);
        assert_eq!(bin_samples(-4.0, 0.3), 0);
    }

    #[test]
    fn code_repeats_floor_at_two() {
        assert_eq!(code_repeats(3, 10), 2);
        assert_eq!(code_repeats(40, 10), 5);
        assert_eq!(code_repeats(40, 0), 0);
    }

    #[test]
    fn guarded_division() {
        assert_eq!(guarded_div(1.0, 0.0), 0.0);
        assert_eq!(guarded_div(1.0, 4.0), 0.25);
    }
}
