//! Constants for the ADCP Deployment Predictor
//!
//! Centralized, documented constants used by the resolver and both
//! prediction engines. Frequency-table and hardware-variant data live in
//! [`crate::tables`] and [`crate::hardware`]; everything here is a scalar.
//!
//! ## Organization
//!
//! - **Acoustics**: sound speed, range-equation bonuses, precision models
//! - **Power**: electronics draws, event durations, battery packs
//! - **Bytes**: ensemble data-set sizes
//! - **Time**: unit conversions and deployment defaults
//!
//! Names carry their unit (`_HZ`, `_M`, `_S`, `_WATTS`, `_WH`, `_BYTES`).

/// Sonar-equation and precision-model constants.
pub mod acoustics;

/// Electronics power draws and battery packs.
pub mod power;

/// Ensemble data-set sizes.
pub mod bytes;

/// Time conversions and deployment defaults.
pub mod time;

// Re-export commonly used constants for convenience
pub use acoustics::{
    SPEED_OF_SOUND_SEAWATER_MPS, DEFAULT_SNR_DB, DEFAULT_CYCLES_PER_ELEMENT,
    DEFAULT_LAG_LENGTH_M, DEFAULT_BROADBAND_BETA,
};

pub use power::{
    RECEIVE_WATTS, SLEEP_WATTS, ALKALINE_RATED_WH, LITHIUM_RATED_WH,
};

pub use bytes::{
    PROFILE_OVERHEAD_BYTES, BOTTOM_TRACK_BYTES, GENERAL_OVERHEAD_BYTES,
    BURST_ENSEMBLE_OVERHEAD_BYTES,
};

pub use time::{
    SECONDS_PER_HOUR, SECONDS_PER_DAY, DAYS_PER_YEAR,
    DEFAULT_DEPLOYMENT_DAYS, DEFAULT_ENSEMBLE_INTERVAL_S,
};
