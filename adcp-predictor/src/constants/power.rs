//! Electronics Power Constants
//!
//! Per-event and continuous power draws of the profiler electronics, plus
//! the battery packs offered for self-contained deployments. Energy is
//! always accounted in watt-hours: `watts × seconds / 3600`.

// ===== RECEIVE =====

/// Receiver power draw while listening to a water-profile ping (W).
///
/// Doubled above [`DUAL_RECEIVE_THRESHOLD_HZ`](super::acoustics::DUAL_RECEIVE_THRESHOLD_HZ)
/// where the second channel bank is powered.
pub const RECEIVE_WATTS: f64 = 3.0;

// ===== TRANSMIT =====

/// Fraction of a broadband code during which the transmitter is driving.
pub const BROADBAND_DUTY_CYCLE: f64 = 0.5;

/// Narrowband pulses drive the transmitter for their whole length.
pub const NARROWBAND_DUTY_CYCLE: f64 = 1.0;

/// Bottom-track transmit pulse length as a fraction of its receive window.
pub const BOTTOM_TRACK_PULSE_FRACTION: f64 = 0.1;

// ===== PER-ENSEMBLE EVENTS =====

/// Power drawn while waking from sleep (W).
pub const WAKEUP_WATTS: f64 = 0.4;

/// Time spent waking from sleep (s).
pub const WAKEUP_SECONDS: f64 = 0.4;

/// Power drawn while initializing the acquisition hardware (W).
pub const INIT_WATTS: f64 = 2.8;

/// Time spent initializing the acquisition hardware (s).
pub const INIT_SECONDS: f64 = 0.25;

/// Power drawn while writing an ensemble to the recorder (W).
pub const SAVE_WATTS: f64 = 1.8;

/// Time spent writing an ensemble to the recorder (s).
pub const SAVE_SECONDS: f64 = 0.15;

/// Quiescent draw between ensembles (W).
pub const SLEEP_WATTS: f64 = 0.00125;

// ===== CAPACITOR BANK =====

/// Fraction of transmit energy lost recharging the capacitor bank.
pub const CAPACITOR_RECHARGE_FACTOR: f64 = 0.03;

/// Leakage derating applied to the capacitor bank (dimensionless).
pub const CAPACITOR_LEAKAGE_FACTOR: f64 = 1.3;

/// Microamps to amps.
pub const MICRO: f64 = 1e-6;

// ===== BURST (WAVES) =====

/// Fixed energy spent waking for each burst (W·s).
pub const BURST_WAKEUP_WATT_SECONDS: f64 = 2.0;

/// Transmit time of one burst ping (s).
pub const BURST_TRANSMIT_SECONDS: f64 = 0.00155;

/// Hours of sleep charged to each burst.
pub const BURST_SLEEP_HOURS: f64 = 24.0;

/// Receive power, 4-beam subsystem (W).
pub const BURST_RECEIVE_WATTS_4_BEAM: f64 = 2.60;

/// Receive power, 4-beam plus vertical beam (W).
pub const BURST_RECEIVE_WATTS_5_BEAM: f64 = 3.10;

/// Receive power, 4-beam plus 3-beam secondary (W).
pub const BURST_RECEIVE_WATTS_7_BEAM: f64 = 4.20;

/// Receive power, dual-frequency 4-beam pair (W).
pub const BURST_RECEIVE_WATTS_8_BEAM: f64 = 4.75;

// ===== BATTERIES =====

/// Rated energy of an alkaline battery pack (Wh).
///
/// Source: 38C alkaline pack datasheet at 0°C
pub const ALKALINE_RATED_WH: f64 = 440.0;

/// Usable fraction of an alkaline pack in cold water.
pub const ALKALINE_DERATE: f64 = 0.85;

/// Alkaline self discharge (Wh per year).
pub const ALKALINE_SELF_DISCHARGE_WH_PER_YEAR: f64 = 22.0;

/// Rated energy of a lithium battery pack (Wh).
pub const LITHIUM_RATED_WH: f64 = 800.0;

/// Usable fraction of a lithium pack.
pub const LITHIUM_DERATE: f64 = 0.90;

/// Lithium self discharge (Wh per year).
pub const LITHIUM_SELF_DISCHARGE_WH_PER_YEAR: f64 = 8.0;
