//! Configuration Resolver
//!
//! ## Overview
//!
//! Turns a subsystem code plus optional overrides into a complete
//! [`DeploymentConfig`]. Resolution always rewrites every field the scope
//! owns, so switching from a 300 kHz to a 1200 kHz head can never leave a
//! 4 m bin behind on a 25 m range instrument.
//!
//! ```text
//! code ──► HardwareVariant ──► apply_variant(scope) ──► overrides ──► config
//!              │                      │
//!              │ unknown: warn,       ├─ Geometry: frequency, beams, angle, diameter
//!              │ config unchanged     └─ Full:     Geometry + bins, blank, pings, TBP
//! ```
//!
//! Both scopes go through the same function; the geometry written by a
//! `Geometry` pass is bit-identical to that of a `Full` pass.

use crate::config::DeploymentConfig;
use crate::hardware::{HardwareVariant, SubsystemCode, DEFAULT_VARIANT};

/// Which fields a variant rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveScope {
    /// Frequency, beam count, beam angle and beam diameter only
    Geometry,
    /// Geometry plus every band default
    Full,
}

/// Explicit values applied after the variant defaults
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfigOverrides {
    /// Operating frequency (Hz)
    pub frequency_hz: Option<f64>,
    /// Beam count
    pub beams: Option<u8>,
    /// Beam angle (degrees)
    pub beam_angle_deg: Option<f64>,
    /// Transducer diameter (m)
    pub beam_diameter_m: Option<f64>,
    /// Bin size (m)
    pub bin_size_m: Option<f64>,
    /// Number of bins
    pub num_bins: Option<u32>,
    /// Blank (m)
    pub blank_m: Option<f64>,
    /// Pings per ensemble
    pub pings: Option<u32>,
    /// Water-profile time between pings (s)
    pub wp_time_between_pings_s: Option<f64>,
    /// Bottom-track time between pings (s)
    pub bt_time_between_pings_s: Option<f64>,
}

impl ConfigOverrides {
    /// Whether no field is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every set field into `config`
    pub fn apply_to(&self, config: &mut DeploymentConfig) {
        let xdcr = &mut config.transducer;
        if let Some(v) = self.frequency_hz {
            xdcr.frequency_hz = v;
        }
        if let Some(v) = self.beams {
            xdcr.beams = v;
        }
        if let Some(v) = self.beam_angle_deg {
            xdcr.beam_angle_deg = v;
        }
        if let Some(v) = self.beam_diameter_m {
            xdcr.beam_diameter_m = v;
        }

        let wp = &mut config.water_profile;
        if let Some(v) = self.bin_size_m {
            wp.bin_size_m = v;
        }
        if let Some(v) = self.num_bins {
            wp.num_bins = v;
        }
        if let Some(v) = self.blank_m {
            wp.blank_m = v;
        }
        if let Some(v) = self.pings {
            wp.pings = v;
            config.bottom_track.pings = v;
        }
        if let Some(v) = self.wp_time_between_pings_s {
            wp.time_between_pings_s = v;
        }
        if let Some(v) = self.bt_time_between_pings_s {
            config.bottom_track.time_between_pings_s = v;
        }
    }
}

/// Rewrite the fields `scope` owns from `variant`
pub fn apply_variant_defaults(config: &mut DeploymentConfig, variant: &HardwareVariant, scope: ResolveScope) {
    let band = variant.band.defaults();

    config.transducer.frequency_hz = variant.band.operating_hz();
    config.transducer.beams = variant.beams;
    config.transducer.beam_angle_deg = variant.beam_angle_deg;
    config.transducer.beam_diameter_m = band.beam_diameter_m;

    if scope == ResolveScope::Full {
        config.water_profile.bin_size_m = band.bin_size_m;
        config.water_profile.num_bins = band.num_bins;
        config.water_profile.blank_m = band.blank_m;
        config.water_profile.pings = band.pings;
        config.water_profile.time_between_pings_s = band.wp_time_between_pings_s;
        config.bottom_track.pings = band.pings;
        config.bottom_track.time_between_pings_s = band.bt_time_between_pings_s;
    }
}

/// Copy of `config` re-derived from the variant `code`
///
/// An unknown code leaves the configuration unchanged.
pub fn apply_variant(config: &DeploymentConfig, code: SubsystemCode, scope: ResolveScope) -> DeploymentConfig {
    let mut resolved = config.clone();
    match code.variant() {
        Some(variant) => {
            log_debug!("Applying variant '{}' ({}) scope {:?}", variant.code, variant.description, scope);
            apply_variant_defaults(&mut resolved, variant, scope);
        }
        None => {
            log_warn!("Unknown subsystem code '{}', configuration unchanged", code.0);
        }
    }
    resolved
}

/// Complete configuration for a subsystem code
///
/// `None` selects the 300 kHz 4-beam 20° variant. Deployment-level fields
/// (duration, interval, battery, burst) take their ambient defaults.
pub fn resolve(code: Option<SubsystemCode>, overrides: Option<&ConfigOverrides>) -> DeploymentConfig {
    let mut config = DeploymentConfig::default();
    apply_variant_defaults(&mut config, &DEFAULT_VARIANT, ResolveScope::Full);

    if let Some(code) = code {
        config = apply_variant(&config, code, ResolveScope::Full);
    }
    if let Some(overrides) = overrides {
        overrides.apply_to(&mut config);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::VARIANTS;

    #[test]
    fn no_code_is_default_variant() {
        assert_eq!(resolve(None, None), DeploymentConfig::default());
        assert_eq!(resolve(SubsystemCode::parse(""), None), DeploymentConfig::default());
    }

    #[test]
    fn scopes_agree_on_geometry() {
        let base = DeploymentConfig::default();
        for variant in VARIANTS.iter() {
            let code = SubsystemCode(variant.code);
            let geometry = apply_variant(&base, code, ResolveScope::Geometry);
            let full = apply_variant(&base, code, ResolveScope::Full);
            assert_eq!(geometry.transducer, full.transducer, "variant {}", variant.code);
        }
    }

    #[test]
    fn geometry_scope_keeps_profile() {
        let base = DeploymentConfig::default();
        let geometry = apply_variant(&base, SubsystemCode('2'), ResolveScope::Geometry);
        assert_eq!(geometry.water_profile, base.water_profile);
        assert_eq!(geometry.transducer.frequency_hz, 1_228_800.0);
    }

    #[test]
    fn unknown_code_changes_nothing() {
        let base = resolve(Some(SubsystemCode('E')), None);
        let after = apply_variant(&base, SubsystemCode('?'), ResolveScope::Full);
        assert_eq!(after, base);
    }

    #[test]
    fn switching_variant_leaves_no_stale_defaults() {
        let low = resolve(Some(SubsystemCode('F')), None);
        let switched = apply_variant(&low, SubsystemCode('2'), ResolveScope::Full);
        assert_eq!(switched, resolve(Some(SubsystemCode('2')), None));
    }

    #[test]
    fn overrides_win_over_variant() {
        let overrides = ConfigOverrides {
            num_bins: Some(100),
            bin_size_m: Some(0.5),
            ..Default::default()
        };
        let config = resolve(Some(SubsystemCode('3')), Some(&overrides));
        assert_eq!(config.water_profile.num_bins, 100);
        assert_eq!(config.water_profile.bin_size_m, 0.5);
        // Untouched fields come from the variant
        assert_eq!(config.water_profile.blank_m, 0.20);
        assert!(!overrides.is_empty());
        assert!(ConfigOverrides::default().is_empty());
    }
}
