//! Ensemble Byte Layout
//!
//! Sizes of the data sets that make up one recorded ensemble. These drive
//! the per-ensemble size and the total recorder volume of a deployment.

// ===== WATER PROFILE =====

/// Number of per-bin data sets in a water-profile ensemble.
///
/// Beam, instrument and earth velocity, amplitude, correlation, good-beam
/// and good-earth counts.
pub const PROFILE_DATA_SETS: u64 = 7;

/// Bytes per value in a per-bin data set (single-precision float).
pub const BYTES_PER_VALUE: u64 = 4;

/// Header bytes of each per-bin data set.
pub const DATA_SET_HEADER_BYTES: u64 = 16;

/// Fixed bytes for the water-profile data-set headers.
pub const PROFILE_OVERHEAD_BYTES: u64 = PROFILE_DATA_SETS * DATA_SET_HEADER_BYTES;

// ===== OTHER DATA SETS =====

/// Bottom-track data set (4-beam layout).
pub const BOTTOM_TRACK_BYTES: u64 = 384;

/// Ensemble, ancillary and system data sets, present whenever anything pings.
pub const GENERAL_OVERHEAD_BYTES: u64 = 504;

/// Trailing checksum.
pub const CHECKSUM_BYTES: u64 = 4;

/// Ensemble header wrapper.
pub const WRAPPER_BYTES: u64 = 32;

/// Minimum status record written when neither mode is enabled.
pub const NO_PING_BYTES: u64 = 136;

// ===== BURST (WAVES) =====

/// Fixed bytes of every ensemble inside a burst, excluding bins.
pub const BURST_ENSEMBLE_OVERHEAD_BYTES: u64 =
    PROFILE_OVERHEAD_BYTES + GENERAL_OVERHEAD_BYTES + CHECKSUM_BYTES + WRAPPER_BYTES;
