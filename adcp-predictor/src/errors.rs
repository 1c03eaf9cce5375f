//! Error Types for Implausible Deployment Configurations
//!
//! ## Design Philosophy
//!
//! The prediction engines never fail. A configuration that is still being
//! edited (a zero interval, a frequency below every table) produces zeros for
//! the affected quantities instead of an error, so an interactive caller can
//! recompute on every keystroke.
//!
//! These errors belong to the optional plausibility pass in
//! [`crate::validators`], which a caller runs when it wants to know *why* a
//! prediction looks degenerate:
//!
//! 1. **Small Size**: every variant is a handful of scalars plus a
//!    `&'static str` field name.
//! 2. **No Heap Allocation**: usable from `no_std` builds and storable in a
//!    `heapless::Vec` report.
//! 3. **Copy Semantics**: returned by value from hot paths.
//!
//! ## Error Categories
//!
//! ### Malformed input
//! - `InvalidValue`: NaN or infinity in a numeric field
//! - `OutOfRange`: a field outside its physical limits
//! - `UnsupportedBeamCount`: beams other than 1, 3 or 4
//! - `BelowLowestTable`: no frequency table covers the frequency
//!
//! ### Timing
//! - `EnsembleOverrun`: the pings of one ensemble do not fit its interval
//! - `BurstOverrun`: the ensembles of one burst do not fit the burst interval
//!
//! ### Outcome
//! - `ProfileBeyondRange`: bins extend past the predicted profiling range
//! - `NoBatteryCapacity`: derate and self discharge leave nothing usable
//!
//! ```rust
//! use adcp_predictor::{resolve, ConfigError, PlausibilityValidator, Validator};
//!
//! let mut config = resolve(None, None);
//! config.ensemble_interval_s = 0.0;
//!
//! match PlausibilityValidator::default().validate(&config) {
//!     Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "ensemble_interval_s"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for plausibility checks
pub type ValidationResult<T> = Result<T, ConfigError>;

/// Plausibility failures - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConfigError {
    /// Field is NaN or infinite
    #[error("Invalid value in {field}: not a finite number")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
    },

    /// Field outside its physical limits
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The configured value
        value: f64,
        /// Smallest plausible value
        min: f64,
        /// Largest plausible value
        max: f64,
    },

    /// Only 1 (vertical), 3 and 4 beam heads exist
    #[error("Unsupported beam count {beams}")]
    UnsupportedBeamCount {
        /// Configured beam count
        beams: u8,
    },

    /// Frequency below the lowest analysis table - ranges will be zero
    #[error("Frequency {frequency_hz} Hz is below every frequency table")]
    BelowLowestTable {
        /// Configured acoustic frequency
        frequency_hz: f64,
    },

    /// Pings of one ensemble take longer than the ensemble interval
    #[error("Ensemble needs {required_s} s but interval is {interval_s} s")]
    EnsembleOverrun {
        /// Time the configured pings take
        required_s: f64,
        /// Configured ensemble interval
        interval_s: f64,
    },

    /// Ensembles of one burst take longer than the burst interval
    #[error("Burst needs {required_s} s but burst interval is {interval_s} s")]
    BurstOverrun {
        /// Time the configured burst takes
        required_s: f64,
        /// Configured burst interval
        interval_s: f64,
    },

    /// Blank plus bins reach past the predicted profiling range
    #[error("Profile extends to {profile_m} m but predicted range is {range_m} m")]
    ProfileBeyondRange {
        /// Blank plus bins times bin size
        profile_m: f64,
        /// Predicted profiling range
        range_m: f64,
    },

    /// Battery derate and self discharge leave no usable energy
    #[error("Battery has no usable capacity for this deployment")]
    NoBatteryCapacity,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "Invalid value in {}", field),
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {}]", field, value, min, max),
            Self::UnsupportedBeamCount { beams } =>
                defmt::write!(fmt, "Unsupported beams {}", beams),
            Self::BelowLowestTable { frequency_hz } =>
                defmt::write!(fmt, "{} Hz below tables", frequency_hz),
            Self::EnsembleOverrun { required_s, interval_s } =>
                defmt::write!(fmt, "Ensemble {} s > {} s", required_s, interval_s),
            Self::BurstOverrun { required_s, interval_s } =>
                defmt::write!(fmt, "Burst {} s > {} s", required_s, interval_s),
            Self::ProfileBeyondRange { profile_m, range_m } =>
                defmt::write!(fmt, "Profile {} m > range {} m", profile_m, range_m),
            Self::NoBatteryCapacity =>
                defmt::write!(fmt, "No battery capacity"),
        }
    }
}
