//! Frequency Analysis Tables
//!
//! ## Overview
//!
//! Range, transmit power and sampling are all scaled from six reference
//! instruments, one per octave from 1.2 MHz down to 38 kHz. Each reference is a
//! [`FrequencyTable`]: the range it achieves with its own bin size, beam
//! geometry and transmit electronics. A configuration is predicted by scaling
//! from the one table whose frequency band it falls in.
//!
//! ## Selection by Summation
//!
//! No code outside this module branches on *which* table applies. Instead
//! every per-table quantity is computed for all six tables, multiplied by a
//! 0/1 selection flag and summed:
//!
//! ```text
//! value = Σₖ valueₖ × selectₖ        k = 1200, 600, 300, 150, 75, 38 kHz
//! ```
//!
//! Exactly one flag is 1 for any frequency at or above 34,375 Hz, so the sum
//! is the selected table's value. Below the lowest table every flag is 0 and
//! every sum collapses to 0, which is how a frequency that matches nothing
//! produces zero range instead of an error. Composite terms such as the range
//! reduction divide a selected sum by an all-table sum, so the summation
//! itself is part of the model, not an implementation detail.
//!
//! ## Band Edges
//!
//! Table frequencies sit just below the nominal operating frequencies of the
//! hardware bands (1,228,800 Hz hardware selects the 1,100,000 Hz table):
//!
//! ```text
//! table k selected  ⇔  fₖ ≤ f < fₖ₋₁     (half-open, next table up)
//! 1200 kHz table    ⇔  f ≥ 1,100,000     (no upper bound)
//! ```

use crate::sonar;

/// Number of reference tables.
pub const TABLE_COUNT: usize = 6;

/// One reference instrument of the range/power model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyTable {
    /// Lower band edge of this table (Hz)
    pub frequency_hz: f64,

    /// Reference bin size (m). Also the range gained per dB of margin.
    pub bin_m: f64,

    /// Profiling range achieved with the reference geometry (m)
    pub range_m: f64,

    /// Reference beam angle from vertical (degrees)
    pub beam_angle_deg: f64,

    /// Reference transducer diameter (m)
    pub beam_diameter_m: f64,

    /// Transmit power per beam (W)
    pub xmt_watts: f64,

    /// Transmit supply voltage (V)
    pub xmt_volts: f64,

    /// Transmit capacitor bank (µF). Reference data only: the capacitor
    /// energy term is driven by `xmt_volts` and `leakage_ua`.
    pub capacitance_uf: f64,

    /// Capacitor bank leakage current (µA)
    pub leakage_ua: f64,

    /// Reference cycles per transducer element
    pub cycles_per_element: f64,

    /// Sample rate as a fraction of the acoustic frequency
    pub sampling: f64,
}

impl FrequencyTable {
    /// Whether this table covers `frequency_hz`.
    ///
    /// `upper_hz` is the frequency of the next table up, `None` for the
    /// highest table.
    pub fn covers(&self, frequency_hz: f64, upper_hz: Option<f64>) -> bool {
        match upper_hz {
            Some(upper) => frequency_hz >= self.frequency_hz && frequency_hz < upper,
            None => frequency_hz >= self.frequency_hz,
        }
    }

    /// Directivity index of the reference transducer at the table frequency (dB)
    pub fn directivity_index(&self, speed_of_sound_mps: f64) -> f64 {
        let wavelength = sonar::wavelength(speed_of_sound_mps, self.frequency_hz);
        sonar::directivity_index(self.beam_diameter_m, wavelength)
    }
}

/// 1200 kHz reference
pub const TABLE_1200_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 1_100_000.0,
    bin_m: 1.0,
    range_m: 25.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.0254,
    xmt_watts: 12.3,
    xmt_volts: 24.0,
    capacitance_uf: 1500.0,
    leakage_ua: 3.0,
    cycles_per_element: 12.0,
    sampling: 0.1875,
};

/// 600 kHz reference
pub const TABLE_600_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 550_000.0,
    bin_m: 2.0,
    range_m: 50.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.0508,
    xmt_watts: 27.3,
    xmt_volts: 24.0,
    capacitance_uf: 3300.0,
    leakage_ua: 3.0,
    cycles_per_element: 12.0,
    sampling: 0.25,
};

/// 300 kHz reference
pub const TABLE_300_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 275_000.0,
    bin_m: 4.0,
    range_m: 125.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.1016,
    xmt_watts: 90.0,
    xmt_volts: 36.0,
    capacitance_uf: 4700.0,
    leakage_ua: 4.5,
    cycles_per_element: 12.0,
    sampling: 0.25,
};

/// 150 kHz reference
pub const TABLE_150_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 137_500.0,
    bin_m: 8.0,
    range_m: 250.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.2032,
    xmt_watts: 250.0,
    xmt_volts: 60.0,
    capacitance_uf: 6800.0,
    leakage_ua: 6.0,
    cycles_per_element: 12.0,
    sampling: 0.25,
};

/// 75 kHz reference
pub const TABLE_75_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 68_750.0,
    bin_m: 16.0,
    range_m: 500.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.4064,
    xmt_watts: 600.0,
    xmt_volts: 110.0,
    capacitance_uf: 10_000.0,
    leakage_ua: 9.0,
    cycles_per_element: 12.0,
    sampling: 0.3125,
};

/// 38 kHz reference
pub const TABLE_38_KHZ: FrequencyTable = FrequencyTable {
    frequency_hz: 34_375.0,
    bin_m: 32.0,
    range_m: 1000.0,
    beam_angle_deg: 20.0,
    beam_diameter_m: 0.8128,
    xmt_watts: 1500.0,
    xmt_volts: 160.0,
    capacitance_uf: 15_000.0,
    leakage_ua: 12.0,
    cycles_per_element: 12.0,
    sampling: 0.3125,
};

/// All reference tables, highest frequency first
pub const TABLES: [FrequencyTable; TABLE_COUNT] = [
    TABLE_1200_KHZ,
    TABLE_600_KHZ,
    TABLE_300_KHZ,
    TABLE_150_KHZ,
    TABLE_75_KHZ,
    TABLE_38_KHZ,
];

/// Frequency of the lowest table; nothing below it is predicted (Hz)
pub const LOWEST_TABLE_HZ: f64 = TABLE_38_KHZ.frequency_hz;

/// 0/1 selection flag of every table for `frequency_hz`, in table order
pub fn selection(frequency_hz: f64) -> [f64; TABLE_COUNT] {
    let mut flags = [0.0; TABLE_COUNT];
    for (k, table) in TABLES.iter().enumerate() {
        let upper = if k == 0 { None } else { Some(TABLES[k - 1].frequency_hz) };
        if table.covers(frequency_hz, upper) {
            flags[k] = 1.0;
        }
    }
    flags
}

/// Σ `value(table) × selectₖ` over all six tables, in table order
pub fn weighted_sum<F>(frequency_hz: f64, value: F) -> f64
where
    F: Fn(&FrequencyTable) -> f64,
{
    let flags = selection(frequency_hz);
    TABLES
        .iter()
        .zip(flags.iter())
        .fold(0.0, |sum, (table, flag)| sum + value(table) * flag)
}

/// Σ `value(table)` over all six tables, selected or not
pub fn total<F>(value: F) -> f64
where
    F: Fn(&FrequencyTable) -> f64,
{
    TABLES.iter().fold(0.0, |sum, table| sum + value(table))
}

/// The table covering `frequency_hz`, if any
pub fn selected(frequency_hz: f64) -> Option<&'static FrequencyTable> {
    let flags = selection(frequency_hz);
    TABLES
        .iter()
        .zip(flags.iter())
        .find(|(_, flag)| **flag > 0.0)
        .map(|(table, _)| table)
}
