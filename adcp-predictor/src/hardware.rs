//! Hardware Variants and Subsystem Codes
//!
//! ## Overview
//!
//! A profiler head is identified by a single-character subsystem code. The
//! code fixes the frequency band, the number of beams and the beam angle;
//! the band in turn fixes the transducer diameter and the factory defaults
//! for bin size, bin count, blank and ping timing.
//!
//! ```text
//! Band      Operating Hz   4×20°  4×30°  4×15°  1×vertical
//! 1200 kHz     1,228,800     2      L      b        A
//!  600 kHz       614,400     3      M      c        B
//!  300 kHz       307,200     4      N      d        C
//!  150 kHz       153,600     D      O      e        I
//!   75 kHz        76,800     E      P      f        J
//!   38 kHz        38,400     F      Q      g        K
//! ```
//!
//! The operating frequency is what the hardware transmits. It is *not* the
//! analysis-table frequency of [`crate::tables`]; 1,228,800 Hz hardware is
//! predicted from the 1,100,000 Hz table.
//!
//! Code `G` (20 kHz) appears only in burst transmit-power classes; there is no
//! continuous-mode variant for it.

/// Frequency band of a subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrequencyBand {
    /// 1.2 MHz
    Khz1200,
    /// 600 kHz
    Khz600,
    /// 300 kHz
    Khz300,
    /// 150 kHz
    Khz150,
    /// 75 kHz
    Khz75,
    /// 38 kHz
    Khz38,
    /// 20 kHz (burst transmit class only)
    Khz20,
}

/// Factory defaults that follow from the frequency band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDefaults {
    /// Transducer diameter (m)
    pub beam_diameter_m: f64,
    /// Water-profile bin size (m)
    pub bin_size_m: f64,
    /// Number of water-profile bins
    pub num_bins: u32,
    /// Blank after transmit (m)
    pub blank_m: f64,
    /// Water-profile pings per ensemble
    pub pings: u32,
    /// Time between water-profile pings (s)
    pub wp_time_between_pings_s: f64,
    /// Time between bottom-track pings (s)
    pub bt_time_between_pings_s: f64,
}

impl FrequencyBand {
    /// Frequency the hardware transmits at (Hz)
    pub const fn operating_hz(self) -> f64 {
        match self {
            Self::Khz1200 => 1_228_800.0,
            Self::Khz600 => 614_400.0,
            Self::Khz300 => 307_200.0,
            Self::Khz150 => 153_600.0,
            Self::Khz75 => 76_800.0,
            Self::Khz38 => 38_400.0,
            Self::Khz20 => 19_200.0,
        }
    }

    /// Factory defaults for this band
    pub const fn defaults(self) -> BandDefaults {
        match self {
            Self::Khz1200 => BandDefaults {
                beam_diameter_m: 0.0254,
                bin_size_m: 1.0,
                num_bins: 20,
                blank_m: 0.10,
                pings: 1,
                wp_time_between_pings_s: 0.02,
                bt_time_between_pings_s: 0.02,
            },
            Self::Khz600 => BandDefaults {
                beam_diameter_m: 0.0508,
                bin_size_m: 2.0,
                num_bins: 25,
                blank_m: 0.20,
                pings: 1,
                wp_time_between_pings_s: 0.05,
                bt_time_between_pings_s: 0.05,
            },
            Self::Khz300 => BandDefaults {
                beam_diameter_m: 0.1016,
                bin_size_m: 4.0,
                num_bins: 30,
                blank_m: 0.40,
                pings: 1,
                wp_time_between_pings_s: 0.13,
                bt_time_between_pings_s: 0.13,
            },
            Self::Khz150 => BandDefaults {
                beam_diameter_m: 0.2032,
                bin_size_m: 8.0,
                num_bins: 30,
                blank_m: 0.80,
                pings: 1,
                wp_time_between_pings_s: 0.25,
                bt_time_between_pings_s: 0.25,
            },
            Self::Khz75 => BandDefaults {
                beam_diameter_m: 0.4064,
                bin_size_m: 16.0,
                num_bins: 30,
                blank_m: 1.60,
                pings: 1,
                wp_time_between_pings_s: 0.50,
                bt_time_between_pings_s: 0.50,
            },
            Self::Khz38 | Self::Khz20 => BandDefaults {
                beam_diameter_m: 0.8128,
                bin_size_m: 32.0,
                num_bins: 30,
                blank_m: 3.20,
                pings: 1,
                wp_time_between_pings_s: 1.00,
                bt_time_between_pings_s: 1.00,
            },
        }
    }

    /// Burst-mode transmit power of a full 4-beam head in this band (W)
    pub const fn burst_xmt_watts(self) -> f64 {
        match self {
            Self::Khz1200 => 20.0,
            Self::Khz600 => 50.0,
            Self::Khz300 => 140.0,
            Self::Khz150 => 400.0,
            Self::Khz75 => 1200.0,
            Self::Khz38 => 3600.0,
            Self::Khz20 => 8000.0,
        }
    }
}

/// One orderable profiler head
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareVariant {
    /// Subsystem code character
    pub code: char,
    /// Frequency band
    pub band: FrequencyBand,
    /// Number of beams (1 for a vertical beam)
    pub beams: u8,
    /// Beam angle from vertical (degrees); 0 for a vertical beam
    pub beam_angle_deg: f64,
    /// Human readable description
    pub description: &'static str,
}

impl HardwareVariant {
    const fn new(code: char, band: FrequencyBand, beams: u8, beam_angle_deg: f64, description: &'static str) -> Self {
        Self { code, band, beams, beam_angle_deg, description }
    }

    /// Whether this head is a single vertical beam
    pub fn is_vertical(&self) -> bool {
        self.beam_angle_deg == 0.0
    }
}

use FrequencyBand::*;

/// Every continuous-mode variant
pub const VARIANTS: [HardwareVariant; 24] = [
    HardwareVariant::new('2', Khz1200, 4, 20.0, "1.2 MHz 4-beam 20° piston"),
    HardwareVariant::new('3', Khz600, 4, 20.0, "600 kHz 4-beam 20° piston"),
    HardwareVariant::new('4', Khz300, 4, 20.0, "300 kHz 4-beam 20° piston"),
    HardwareVariant::new('D', Khz150, 4, 20.0, "150 kHz 4-beam 20° piston"),
    HardwareVariant::new('E', Khz75, 4, 20.0, "75 kHz 4-beam 20° piston"),
    HardwareVariant::new('F', Khz38, 4, 20.0, "38 kHz 4-beam 20° piston"),
    HardwareVariant::new('L', Khz1200, 4, 30.0, "1.2 MHz 4-beam 30° piston"),
    HardwareVariant::new('M', Khz600, 4, 30.0, "600 kHz 4-beam 30° piston"),
    HardwareVariant::new('N', Khz300, 4, 30.0, "300 kHz 4-beam 30° piston"),
    HardwareVariant::new('O', Khz150, 4, 30.0, "150 kHz 4-beam 30° piston"),
    HardwareVariant::new('P', Khz75, 4, 30.0, "75 kHz 4-beam 30° piston"),
    HardwareVariant::new('Q', Khz38, 4, 30.0, "38 kHz 4-beam 30° piston"),
    HardwareVariant::new('b', Khz1200, 4, 15.0, "1.2 MHz 4-beam 15° piston"),
    HardwareVariant::new('c', Khz600, 4, 15.0, "600 kHz 4-beam 15° piston"),
    HardwareVariant::new('d', Khz300, 4, 15.0, "300 kHz 4-beam 15° piston"),
    HardwareVariant::new('e', Khz150, 4, 15.0, "150 kHz 4-beam 15° piston"),
    HardwareVariant::new('f', Khz75, 4, 15.0, "75 kHz 4-beam 15° piston"),
    HardwareVariant::new('g', Khz38, 4, 15.0, "38 kHz 4-beam 15° piston"),
    HardwareVariant::new('A', Khz1200, 1, 0.0, "1.2 MHz vertical beam"),
    HardwareVariant::new('B', Khz600, 1, 0.0, "600 kHz vertical beam"),
    HardwareVariant::new('C', Khz300, 1, 0.0, "300 kHz vertical beam"),
    HardwareVariant::new('I', Khz150, 1, 0.0, "150 kHz vertical beam"),
    HardwareVariant::new('J', Khz75, 1, 0.0, "75 kHz vertical beam"),
    HardwareVariant::new('K', Khz38, 1, 0.0, "38 kHz vertical beam"),
];

/// Variant used when none is given: 300 kHz, 4 beams, 20°, piston
pub const DEFAULT_VARIANT: HardwareVariant = VARIANTS[2];

/// Single-character subsystem code
///
/// Any character is representable; unknown codes simply resolve to no
/// variant and no burst power class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubsystemCode(pub char);

impl SubsystemCode {
    /// Code of [`DEFAULT_VARIANT`]
    pub const DEFAULT: Self = Self(DEFAULT_VARIANT.code);

    /// Parse a code from user text
    ///
    /// `None` for blank text ("no variant") and for anything that is not
    /// exactly one character once trimmed.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Some(Self(code)),
            _ => None,
        }
    }

    /// Continuous-mode variant for this code
    pub fn variant(self) -> Option<&'static HardwareVariant> {
        VARIANTS.iter().find(|v| v.code == self.0)
    }

    /// Frequency band, including burst-only codes
    pub fn band(self) -> Option<FrequencyBand> {
        match self.0 {
            'G' => Some(Khz20),
            _ => self.variant().map(|v| v.band),
        }
    }

    /// Beams contributed by this subsystem
    pub fn beams(self) -> u8 {
        match self.0 {
            'G' => 4,
            _ => self.variant().map_or(0, |v| v.beams),
        }
    }
}

impl Default for SubsystemCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}
