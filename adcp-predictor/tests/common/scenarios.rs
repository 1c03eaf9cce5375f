//! Pre-built deployment scenarios
//!
//! Each scenario is a configuration an operator would actually plan, with
//! the outcomes that are exact by construction (counts and bytes).

use adcp_predictor::{BatteryType, DeploymentConfig, SubsystemCode, TransmitMode};

use super::variant;

/// Deployment with its exact expected counts
pub struct Scenario {
    pub name: &'static str,
    pub config: DeploymentConfig,
    pub ensembles: u64,
    pub ensemble_bytes: u64,
}

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// 300 kHz default head, one day at 1 s
    pub fn default_day() -> Scenario {
        Scenario {
            name: "default_day",
            config: DeploymentConfig::default(),
            ensembles: 86_400,
            ensemble_bytes: 4396,
        }
    }

    /// 600 kHz harbour survey, ten minute ensembles for 90 days on lithium
    pub fn harbour_quarter() -> Scenario {
        let config = variant('3')
            .with_duration_days(90.0)
            .with_ensemble_interval(600.0)
            .with_battery(BatteryType::Lithium);
        Scenario {
            name: "harbour_quarter",
            config,
            ensembles: 90 * 144,
            // 112 + 25 × 112 + 384 + 504 + 36
            ensemble_bytes: 3836,
        }
    }

    /// 75 kHz long-range narrowband, hourly for a year, no bottom track
    pub fn deep_mooring_year() -> Scenario {
        let mut config = variant('E')
            .with_duration_days(365.0)
            .with_ensemble_interval(3600.0)
            .with_transmit(TransmitMode::Narrowband);
        config.bottom_track.enabled = false;
        Scenario {
            name: "deep_mooring_year",
            config,
            ensembles: 365 * 24,
            // 112 + 30 × 112 + 504 + 36
            ensemble_bytes: 4012,
        }
    }

    /// 1.2 MHz vertical beam, 2 s ensembles for a week
    pub fn vertical_week() -> Scenario {
        let config = variant('A').with_duration_days(7.0).with_ensemble_interval(2.0);
        Scenario {
            name: "vertical_week",
            config,
            ensembles: 7 * 43_200,
            // 112 + 20 × 28 + 384 + 504 + 36
            ensemble_bytes: 1596,
        }
    }

    /// All scenarios
    pub fn all() -> [Scenario; 4] {
        [
            Self::default_day(),
            Self::harbour_quarter(),
            Self::deep_mooring_year(),
            Self::vertical_week(),
        ]
    }
}

/// Subsystem code pair of a 4-beam head with a vertical fifth beam
pub fn five_beam_300khz() -> (SubsystemCode, SubsystemCode) {
    (SubsystemCode('4'), SubsystemCode('C'))
}
