//! JSON deployment plans
//!
//! A plan names a hardware variant, optional overrides of its defaults and
//! the deployment-level numbers. Every field is optional; command-line flags
//! replace whatever the file says.
//!
//! ```json
//! {
//!   "variant": "E",
//!   "overrides": { "num_bins": 40, "bin_size_m": 16.0 },
//!   "duration_days": 365,
//!   "ensemble_interval_s": 1800,
//!   "battery": "Lithium"
//! }
//! ```

use std::fs;
use std::path::Path;

use adcp_predictor::{resolve, BatteryType, Burst, ConfigOverrides, DeploymentConfig, SubsystemCode, TransmitMode};
use anyhow::Context;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use crate::args::Args;

/// Caller-supplied battery numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomBattery {
    pub rated_wh: f64,
    pub derate: f64,
    pub self_discharge_wh_per_year: f64,
}

/// Waves burst settings; the primary subsystem is the plan's variant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BurstPlan {
    pub ensembles_per_burst: u32,
    pub burst_interval_s: f64,
    pub sample_interval_s: Option<f64>,
    pub secondary: Option<SubsystemCode>,
    pub ping_secondary: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanFile {
    /// Blank text selects the default variant
    #[serde(deserialize_with = "subsystem_code_text")]
    pub variant: Option<SubsystemCode>,
    pub overrides: Option<ConfigOverrides>,
    pub duration_days: Option<f64>,
    pub ensemble_interval_s: Option<f64>,
    pub speed_of_sound_mps: Option<f64>,
    pub snr_db: Option<f64>,
    pub transmit: Option<TransmitMode>,
    pub battery: Option<BatteryType>,
    pub custom_battery: Option<CustomBattery>,
    pub burst: Option<BurstPlan>,
}

fn subsystem_code_text<'de, D>(deserializer: D) -> Result<Option<SubsystemCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    match text.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => SubsystemCode::parse(text)
            .map(Some)
            .ok_or_else(|| de::Error::invalid_value(Unexpected::Str(text), &"a single-character subsystem code")),
    }
}

impl PlanFile {
    /// Read and parse a plan from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("Reading plan {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Parsing plan {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Overwrite plan fields with the flags given on the command line
    pub fn apply_args(&mut self, args: &Args) {
        if args.variant.is_some() {
            self.variant = args.variant;
        }
        if args.days.is_some() {
            self.duration_days = args.days;
        }
        if args.interval.is_some() {
            self.ensemble_interval_s = args.interval;
        }
        if let Some(kind) = args.battery {
            self.battery = Some(kind);
            self.custom_battery = None;
        }
        if args.narrowband {
            self.transmit = Some(TransmitMode::Narrowband);
        }
        if args.burst_ensembles.is_some() || args.burst_interval.is_some() {
            let burst = self.burst.get_or_insert_with(BurstPlan::default);
            if let Some(n) = args.burst_ensembles {
                burst.ensembles_per_burst = n;
            }
            if let Some(interval) = args.burst_interval {
                burst.burst_interval_s = interval;
            }
        }
    }

    /// Resolve the plan into a complete configuration
    pub fn to_config(&self) -> DeploymentConfig {
        let mut config = resolve(self.variant, self.overrides.as_ref());

        if let Some(days) = self.duration_days {
            config = config.with_duration_days(days);
        }
        if let Some(interval) = self.ensemble_interval_s {
            config = config.with_ensemble_interval(interval);
        }
        if let Some(c) = self.speed_of_sound_mps {
            config.speed_of_sound_mps = c;
        }
        if let Some(snr) = self.snr_db {
            config.snr_db = snr;
        }
        if let Some(mode) = self.transmit {
            config = config.with_transmit(mode);
        }

        config = match (self.custom_battery, self.battery) {
            (Some(b), _) => config.with_custom_battery(b.rated_wh, b.derate, b.self_discharge_wh_per_year),
            (None, Some(kind)) => config.with_battery(kind),
            (None, None) => config,
        };

        if let Some(plan) = self.burst {
            let defaults = Burst::default();
            config = config.with_burst(Burst {
                ensembles_per_burst: plan.ensembles_per_burst,
                burst_interval_s: plan.burst_interval_s,
                sample_interval_s: plan.sample_interval_s.unwrap_or(defaults.sample_interval_s),
                primary: self.variant.unwrap_or_default(),
                secondary: plan.secondary,
                ping_secondary: plan.ping_secondary,
            });
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const HARBOUR: &str = include_str!("../plans/harbour.json");

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("adcp-planner").chain(flags.iter().copied())).unwrap()
    }

    #[test]
    fn empty_plan_is_default_config() {
        let plan = PlanFile::parse("{}").unwrap();
        assert_eq!(plan, PlanFile::default());
        assert_eq!(plan.to_config(), DeploymentConfig::default());
    }

    #[test]
    fn bundled_plan_parses() {
        let plan = PlanFile::parse(HARBOUR).unwrap();
        assert_eq!(plan.variant, Some(SubsystemCode('3')));
        let config = plan.to_config();
        assert_eq!(config.transducer.frequency_hz, 614_400.0);
        assert_eq!(config.water_profile.num_bins, 25);
        assert_eq!(config.duration_days, 90.0);
        assert_eq!(config.battery.kind, BatteryType::Lithium);
    }

    #[test]
    fn blank_variant_resolves_to_default() {
        for text in [r#"{ "variant": "" }"#, r#"{ "variant": "  " }"#, r#"{ "variant": null }"#] {
            let plan = PlanFile::parse(text).unwrap();
            assert_eq!(plan.variant, None, "{}", text);
            assert_eq!(plan.to_config(), DeploymentConfig::default());
        }
        assert_eq!(PlanFile::parse(r#"{ "variant": " E " }"#).unwrap().variant, Some(SubsystemCode('E')));
        assert!(PlanFile::parse(r#"{ "variant": "4x" }"#).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(PlanFile::parse(r#"{ "duraton_days": 3 }"#).is_err());
    }

    #[test]
    fn flags_override_file() {
        let mut plan = PlanFile::parse(HARBOUR).unwrap();
        plan.apply_args(&args(&["--variant", "E", "--days", "10", "--battery", "alkaline", "--narrowband"]));

        let config = plan.to_config();
        assert_eq!(config.transducer.frequency_hz, 76_800.0);
        assert_eq!(config.duration_days, 10.0);
        assert_eq!(config.battery.kind, BatteryType::Alkaline);
        assert_eq!(config.transmit, TransmitMode::Narrowband);
        // Overrides from the file still apply on top of the new variant
        assert_eq!(config.water_profile.num_bins, 25);
    }

    #[test]
    fn custom_battery_wins_over_kind() {
        let plan = PlanFile::parse(
            r#"{ "battery": "Alkaline",
                 "custom_battery": { "rated_wh": 900.0, "derate": 0.9, "self_discharge_wh_per_year": 10.0 } }"#,
        )
        .unwrap();
        let battery = plan.to_config().battery;
        assert_eq!(battery.kind, BatteryType::Custom);
        assert_eq!(battery.rated_wh, 900.0);

        let mut plan = plan;
        plan.apply_args(&args(&["--battery", "lithium"]));
        assert_eq!(plan.to_config().battery.kind, BatteryType::Lithium);
    }

    #[test]
    fn burst_flags_build_a_burst() {
        let mut plan = PlanFile::default();
        plan.apply_args(&args(&["--variant", "3", "--burst-ensembles", "2048", "--burst-interval", "3600"]));

        let burst = plan.to_config().burst;
        assert!(burst.is_active());
        assert_eq!(burst.primary, SubsystemCode('3'));
        assert_eq!(burst.ensembles_per_burst, 2048);
        assert_eq!(burst.sample_interval_s, Burst::default().sample_interval_s);
    }

    #[test]
    fn missing_file_has_context() {
        let err = PlanFile::load(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/plan.json"));
    }
}
