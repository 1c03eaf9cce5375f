//! Acoustic Constants for Deployment Prediction
//!
//! This module defines the sonar-equation and velocity-precision constants
//! shared by the continuous and burst engines. All values are in SI units
//! unless the name says otherwise.

// ===== PROPAGATION =====

/// Nominal speed of sound in seawater (m/s).
///
/// Used as the default for new deployment configurations. Varies with
/// temperature, salinity and depth between roughly 1450 and 1550 m/s.
///
/// Source: UNESCO (Chen & Millero) equation at 10°C, 35 PSU, surface
pub const SPEED_OF_SOUND_SEAWATER_MPS: f64 = 1490.0;

/// Default signal-to-noise ratio assumed for precision estimates (dB).
///
/// Represents a well-seeded water column inside the profiling range.
pub const DEFAULT_SNR_DB: f64 = 30.0;

/// Default transducer cycles per element.
///
/// Matches the reference value of every frequency table, so the
/// bandwidth term of the range equation is 0 dB for default configurations.
pub const DEFAULT_CYCLES_PER_ELEMENT: f64 = 12.0;

/// Default broadband lag length (m).
pub const DEFAULT_LAG_LENGTH_M: f64 = 1.0;

// ===== RANGE EQUATION =====

/// Extra range gained by narrowband water profiling, in reference bins.
///
/// Narrowband pulses concentrate energy in a narrower receive bandwidth,
/// buying roughly 20 bins of extra reach over broadband.
pub const NARROWBAND_RANGE_BONUS_BINS: f64 = 20.0;

/// Extra range gained by long-range narrowband bottom tracking, in reference bins.
pub const LONG_RANGE_BOTTOM_TRACK_BONUS_BINS: f64 = 15.0;

/// Bottom track reaches twice the water-profile range (strong boundary echo).
pub const BOTTOM_TRACK_RANGE_FACTOR: f64 = 2.0;

/// Offset added to the transmit-power range reduction term (m).
pub const RANGE_REDUCTION_OFFSET_M: f64 = 1.0;

// ===== BROADBAND PRECISION =====

/// Default broadband correlation coefficient before SNR and code losses.
pub const DEFAULT_BROADBAND_BETA: f64 = 1.0;

/// Broadband radial standard deviation at the reference geometry (m/s).
pub const BROADBAND_REFERENCE_STD_MPS: f64 = 0.034;

/// Lag length, in samples, of the broadband reference geometry.
pub const BROADBAND_REFERENCE_LAG_SAMPLES: f64 = 118.0;

/// Bin length, in samples, of the broadband reference geometry.
pub const BROADBAND_REFERENCE_BIN_SAMPLES: f64 = 14.0;

/// Correlation of the broadband reference geometry.
pub const BROADBAND_REFERENCE_CORRELATION: f64 = 0.5;

/// Minimum number of code repeats in a broadband transmit pulse.
pub const MIN_CODE_REPEATS: u32 = 2;

// ===== NARROWBAND PRECISION =====

/// Empirical narrowband precision correction factor.
///
/// Scales the Cramér-Rao style pulse-pair estimate up to what
/// field deployments actually achieve.
pub const NARROWBAND_FUDGE: f64 = 1.4;

/// First-order SNR coefficient of the narrowband variance model.
pub const NARROWBAND_SNR_COEFF_1: f64 = 36.0;

/// Second-order SNR coefficient of the narrowband variance model.
pub const NARROWBAND_SNR_COEFF_2: f64 = 30.0;

// ===== GEOMETRY =====

/// Frequency above which the receiver runs both channel banks (Hz).
pub const DUAL_RECEIVE_THRESHOLD_HZ: f64 = 700_000.0;

/// Frequency above which bottom-track receive runs both channel banks (Hz).
pub const DUAL_BOTTOM_TRACK_RECEIVE_THRESHOLD_HZ: f64 = 600_000.0;
