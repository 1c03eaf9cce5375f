//! Time-Related Constants
//!
//! Conversion factors used when turning deployment durations into ensemble
//! counts and watt-seconds into watt-hours.

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per hour. Also the watt-seconds in one watt-hour.
pub const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = SECONDS_PER_HOUR * HOURS_PER_DAY;

/// Days per year used for battery self-discharge.
pub const DAYS_PER_YEAR: f64 = 365.0;

// ===== DEPLOYMENT DEFAULTS =====

/// Default deployment duration (days).
pub const DEFAULT_DEPLOYMENT_DAYS: f64 = 1.0;

/// Default ensemble interval (s).
///
/// One ensemble per second is the profiler's factory setting.
pub const DEFAULT_ENSEMBLE_INTERVAL_S: f64 = 1.0;

/// Default interval between burst ensembles (s).
///
/// 2 Hz sampling resolves swell periods down to about 4 s.
pub const DEFAULT_BURST_SAMPLE_INTERVAL_S: f64 = 0.5;
