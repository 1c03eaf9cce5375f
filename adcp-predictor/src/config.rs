//! Deployment Configuration
//!
//! ## Overview
//!
//! [`DeploymentConfig`] is everything a prediction needs, grouped the way an
//! operator thinks about a deployment:
//!
//! ```text
//! DeploymentConfig
//! ├── transducer      frequency, beams, angle, diameter, cycles/element
//! ├── transmit        broadband | narrowband
//! ├── water_profile   bins, blank, lag, pings
//! ├── bottom_track    mode, pings
//! ├── deployment      days, ensemble interval, sound speed, SNR, beta
//! ├── battery         rated Wh, derate, self discharge
//! └── burst           waves sampling (off when either count is 0)
//! ```
//!
//! Frequency, beam geometry and the band defaults only agree with each other
//! when they come from one hardware variant, so build configurations through
//! [`crate::resolver::resolve`] and adjust with the `with_*` transformers. The
//! engines treat a configuration as immutable.

use crate::constants::acoustics::{
    DEFAULT_BROADBAND_BETA, DEFAULT_CYCLES_PER_ELEMENT, DEFAULT_LAG_LENGTH_M, DEFAULT_SNR_DB,
    SPEED_OF_SOUND_SEAWATER_MPS,
};
use crate::constants::power::{
    ALKALINE_DERATE, ALKALINE_RATED_WH, ALKALINE_SELF_DISCHARGE_WH_PER_YEAR, LITHIUM_DERATE,
    LITHIUM_RATED_WH, LITHIUM_SELF_DISCHARGE_WH_PER_YEAR,
};
use crate::constants::time::{
    DAYS_PER_YEAR, DEFAULT_BURST_SAMPLE_INTERVAL_S, DEFAULT_DEPLOYMENT_DAYS,
    DEFAULT_ENSEMBLE_INTERVAL_S, HOURS_PER_DAY, SECONDS_PER_DAY,
};
use crate::hardware::{HardwareVariant, SubsystemCode, DEFAULT_VARIANT};

/// Acoustic head
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Transducer {
    /// Operating frequency (Hz)
    pub frequency_hz: f64,
    /// Number of beams: 1 (vertical), 3 or 4
    pub beams: u8,
    /// Beam angle from vertical (degrees)
    pub beam_angle_deg: f64,
    /// Transducer diameter (m)
    pub beam_diameter_m: f64,
    /// Transmit cycles per element
    pub cycles_per_element: f64,
}

impl Transducer {
    /// Geometry of a hardware variant
    pub fn for_variant(variant: &HardwareVariant) -> Self {
        Self {
            frequency_hz: variant.band.operating_hz(),
            beams: variant.beams,
            beam_angle_deg: variant.beam_angle_deg,
            beam_diameter_m: variant.band.defaults().beam_diameter_m,
            cycles_per_element: DEFAULT_CYCLES_PER_ELEMENT,
        }
    }
}

impl Default for Transducer {
    fn default() -> Self {
        Self::for_variant(&DEFAULT_VARIANT)
    }
}

/// Transmit pulse type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransmitMode {
    /// Coded pulse, lower variance per ping
    #[default]
    Broadband,
    /// Single pulse, longer range
    Narrowband,
}

/// Water-profile settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaterProfile {
    /// Profile the water column
    pub enabled: bool,
    /// Pulse-coherent broadband processing
    pub pulse_coherent: bool,
    /// Bin size (m)
    pub bin_size_m: f64,
    /// Number of bins
    pub num_bins: u32,
    /// Blank after transmit (m)
    pub blank_m: f64,
    /// Pings averaged into one ensemble
    pub pings: u32,
    /// Time between pings (s)
    pub time_between_pings_s: f64,
    /// Broadband lag (m)
    pub lag_length_m: f64,
}

impl Default for WaterProfile {
    fn default() -> Self {
        let band = DEFAULT_VARIANT.band.defaults();
        Self {
            enabled: true,
            pulse_coherent: false,
            bin_size_m: band.bin_size_m,
            num_bins: band.num_bins,
            blank_m: band.blank_m,
            pings: band.pings,
            time_between_pings_s: band.wp_time_between_pings_s,
            lag_length_m: DEFAULT_LAG_LENGTH_M,
        }
    }
}

/// Bottom-track pulse type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BottomTrackMode {
    /// Broadband bottom track
    #[default]
    Broadband,
    /// Narrowband long-range bottom track
    NarrowbandLongRange,
}

/// Bottom-track settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BottomTrack {
    /// Track the bottom
    pub enabled: bool,
    /// Pulse type
    pub mode: BottomTrackMode,
    /// Bottom-track pings per ensemble
    pub pings: u32,
    /// Time between bottom-track pings (s)
    pub time_between_pings_s: f64,
}

impl Default for BottomTrack {
    fn default() -> Self {
        let band = DEFAULT_VARIANT.band.defaults();
        Self {
            enabled: true,
            mode: BottomTrackMode::Broadband,
            pings: band.pings,
            time_between_pings_s: band.bt_time_between_pings_s,
        }
    }
}

/// Battery chemistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatteryType {
    /// Alkaline pack
    #[default]
    Alkaline,
    /// Lithium pack
    Lithium,
    /// Caller-supplied numbers
    Custom,
}

/// One battery pack
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Battery {
    /// Chemistry
    pub kind: BatteryType,
    /// Nameplate energy (Wh)
    pub rated_wh: f64,
    /// Fraction of nameplate energy deliverable in cold water
    pub derate: f64,
    /// Energy lost per year on the shelf (Wh)
    pub self_discharge_wh_per_year: f64,
}

impl Battery {
    /// Standard alkaline pack
    pub const fn alkaline() -> Self {
        Self {
            kind: BatteryType::Alkaline,
            rated_wh: ALKALINE_RATED_WH,
            derate: ALKALINE_DERATE,
            self_discharge_wh_per_year: ALKALINE_SELF_DISCHARGE_WH_PER_YEAR,
        }
    }

    /// Standard lithium pack
    pub const fn lithium() -> Self {
        Self {
            kind: BatteryType::Lithium,
            rated_wh: LITHIUM_RATED_WH,
            derate: LITHIUM_DERATE,
            self_discharge_wh_per_year: LITHIUM_SELF_DISCHARGE_WH_PER_YEAR,
        }
    }

    /// Pack with caller-supplied numbers
    pub const fn custom(rated_wh: f64, derate: f64, self_discharge_wh_per_year: f64) -> Self {
        Self {
            kind: BatteryType::Custom,
            rated_wh,
            derate,
            self_discharge_wh_per_year,
        }
    }

    /// Energy one pack delivers over a deployment of `days` (Wh)
    ///
    /// May be zero or negative for very long deployments; the engines
    /// report zero packs in that case.
    pub fn usable_wh(&self, days: f64) -> f64 {
        self.rated_wh * self.derate - self.self_discharge_wh_per_year * days / DAYS_PER_YEAR
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::alkaline()
    }
}

/// Burst (waves) sampling
///
/// Burst mode is active only when both `ensembles_per_burst` and
/// `burst_interval_s` are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Burst {
    /// Ensembles recorded back to back in one burst
    pub ensembles_per_burst: u32,
    /// Start-to-start time between bursts (s)
    pub burst_interval_s: f64,
    /// Time between ensembles inside a burst (s)
    pub sample_interval_s: f64,
    /// Primary subsystem
    pub primary: SubsystemCode,
    /// Optional secondary subsystem (e.g. a vertical beam)
    pub secondary: Option<SubsystemCode>,
    /// Ping the secondary subsystem instead of the primary
    pub ping_secondary: bool,
}

impl Burst {
    /// Whether burst sampling replaces continuous sampling
    pub fn is_active(&self) -> bool {
        self.ensembles_per_burst > 0 && self.burst_interval_s > 0.0
    }

    /// Subsystem that transmits during the burst
    pub fn pinging(&self) -> SubsystemCode {
        match self.secondary {
            Some(secondary) if self.ping_secondary => secondary,
            _ => self.primary,
        }
    }

    /// Beams of primary plus secondary
    pub fn total_beams(&self) -> u8 {
        let secondary = self.secondary.map_or(0, |s| s.beams());
        self.primary.beams().saturating_add(secondary)
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            ensembles_per_burst: 0,
            burst_interval_s: 0.0,
            sample_interval_s: DEFAULT_BURST_SAMPLE_INTERVAL_S,
            primary: SubsystemCode::DEFAULT,
            secondary: None,
            ping_secondary: false,
        }
    }
}

/// Complete input to a prediction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeploymentConfig {
    /// Acoustic head
    pub transducer: Transducer,
    /// Pulse type
    pub transmit: TransmitMode,
    /// Water-profile settings
    pub water_profile: WaterProfile,
    /// Bottom-track settings
    pub bottom_track: BottomTrack,
    /// Length of the deployment (days)
    pub duration_days: f64,
    /// Start-to-start time between ensembles (s)
    pub ensemble_interval_s: f64,
    /// Speed of sound (m/s)
    pub speed_of_sound_mps: f64,
    /// Signal-to-noise ratio at the end of the profile (dB)
    pub snr_db: f64,
    /// Broadband correlation scale
    pub broadband_beta: f64,
    /// Battery pack
    pub battery: Battery,
    /// Burst sampling
    pub burst: Burst,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            transducer: Transducer::default(),
            transmit: TransmitMode::Broadband,
            water_profile: WaterProfile::default(),
            bottom_track: BottomTrack::default(),
            duration_days: DEFAULT_DEPLOYMENT_DAYS,
            ensemble_interval_s: DEFAULT_ENSEMBLE_INTERVAL_S,
            speed_of_sound_mps: SPEED_OF_SOUND_SEAWATER_MPS,
            snr_db: DEFAULT_SNR_DB,
            broadband_beta: DEFAULT_BROADBAND_BETA,
            battery: Battery::default(),
            burst: Burst::default(),
        }
    }
}

impl DeploymentConfig {
    /// Single vertical beam (no horizontal velocity projection)
    pub fn is_vertical(&self) -> bool {
        self.transducer.beam_angle_deg == 0.0
    }

    /// Narrowband transmission
    pub fn is_narrowband(&self) -> bool {
        self.transmit == TransmitMode::Narrowband
    }

    /// Effective water-profile time between pings; 0 for a single ping
    pub fn time_between_pings(&self) -> f64 {
        if self.water_profile.pings > 1 {
            self.water_profile.time_between_pings_s
        } else {
            0.0
        }
    }

    /// Deployment length in seconds
    pub fn deployment_seconds(&self) -> f64 {
        self.duration_days * SECONDS_PER_DAY
    }

    /// Deployment length in hours
    pub fn deployment_hours(&self) -> f64 {
        self.duration_days * HOURS_PER_DAY
    }

    /// Same configuration with a standard battery chemistry
    ///
    /// `BatteryType::Custom` keeps the current numbers and only relabels
    /// them; use [`Self::with_custom_battery`] to supply new ones.
    pub fn with_battery(&self, kind: BatteryType) -> Self {
        let battery = match kind {
            BatteryType::Alkaline => Battery::alkaline(),
            BatteryType::Lithium => Battery::lithium(),
            BatteryType::Custom => Battery {
                kind: BatteryType::Custom,
                ..self.battery
            },
        };
        Self { battery, ..self.clone() }
    }

    /// Same configuration with a caller-supplied battery
    pub fn with_custom_battery(&self, rated_wh: f64, derate: f64, self_discharge_wh_per_year: f64) -> Self {
        Self {
            battery: Battery::custom(rated_wh, derate, self_discharge_wh_per_year),
            ..self.clone()
        }
    }

    /// Same configuration with another deployment length
    pub fn with_duration_days(&self, duration_days: f64) -> Self {
        Self { duration_days, ..self.clone() }
    }

    /// Same configuration with another ensemble interval
    pub fn with_ensemble_interval(&self, ensemble_interval_s: f64) -> Self {
        Self { ensemble_interval_s, ..self.clone() }
    }

    /// Same configuration with another pulse type
    pub fn with_transmit(&self, transmit: TransmitMode) -> Self {
        Self { transmit, ..self.clone() }
    }

    /// Same configuration with burst sampling
    pub fn with_burst(&self, burst: Burst) -> Self {
        Self { burst, ..self.clone() }
    }
}
