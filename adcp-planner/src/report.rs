//! Text and JSON rendering of a prediction

use std::fmt;

use adcp_predictor::{
    predict_burst, predict_continuous, BurstPredictionResult, DeploymentConfig, PlausibilityValidator,
    PredictionResult, SubsystemCode,
};
use serde::Serialize;

const RULE: &str = "--------------------------------------------------";

#[derive(Debug, Serialize)]
pub struct Report {
    pub variant: Option<&'static str>,
    pub config: DeploymentConfig,
    pub prediction: PredictionResult,
    pub burst: Option<BurstPredictionResult>,
    pub warnings: Vec<String>,
}

impl Report {
    /// Run both engines and the strict plausibility pass
    pub fn new(code: Option<SubsystemCode>, config: DeploymentConfig) -> Self {
        let prediction = predict_continuous(&config);
        let burst = config.burst.is_active().then(|| predict_burst(&config));
        let warnings = PlausibilityValidator::strict()
            .report(&config)
            .iter()
            .map(|e| e.to_string())
            .collect();
        let variant = code.unwrap_or_default().variant().map(|v| v.description);

        Self {
            variant,
            config,
            prediction,
            burst,
            warnings,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        let p = &self.prediction;

        writeln!(f, "ADCP deployment plan")?;
        writeln!(f, "{}", RULE)?;
        if let Some(description) = self.variant {
            writeln!(f, "Hardware         {}", description)?;
        }
        writeln!(
            f,
            "Transducer       {:.0} Hz, {} beams at {}°, {:?}",
            c.transducer.frequency_hz, c.transducer.beams, c.transducer.beam_angle_deg, c.transmit
        )?;
        writeln!(
            f,
            "Profile          {} × {} m bins, {} m blank, {} ping(s)",
            c.water_profile.num_bins, c.water_profile.bin_size_m, c.water_profile.blank_m, c.water_profile.pings
        )?;
        writeln!(
            f,
            "Deployment       {} days, {} s ensembles, {:?} battery",
            c.duration_days, c.ensemble_interval_s, c.battery.kind
        )?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "Profile range    {:>12.1} m", p.profile_range_m)?;
        writeln!(f, "Bottom track     {:>12.1} m", p.bottom_track_range_m)?;
        writeln!(f, "Velocity std     {:>12.4} m/s", p.velocity_std_mps)?;
        writeln!(f, "Radial std       {:>12.4} m/s", p.radial_std_mps)?;
        writeln!(f, "Max velocity     {:>12.2} m/s", p.max_velocity_mps)?;
        writeln!(f, "Ensembles        {:>12}", p.ensembles)?;
        writeln!(f, "Ensemble size    {:>12} bytes", p.ensemble_bytes)?;
        writeln!(f, "Data             {:>12.2} MB", p.data_bytes as f64 / 1e6)?;
        writeln!(f, "Energy           {:>12.2} Wh", p.total_wh)?;
        writeln!(f, "Battery packs    {:>12.2}", p.battery_packs)?;

        if let Some(b) = &self.burst {
            writeln!(f, "{}", RULE)?;
            writeln!(f, "Bursts           {:>12}", b.bursts)?;
            writeln!(f, "Burst length     {:>12.1} s", b.burst_duration_s)?;
            writeln!(f, "Bytes per burst  {:>12}", b.bytes_per_burst)?;
            writeln!(f, "Burst energy     {:>12.2} Wh", b.total_wh)?;
            writeln!(f, "Burst packs      {:>12.2}", b.battery_packs)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "{}", RULE)?;
            for warning in &self.warnings {
                writeln!(f, "warning: {}", warning)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcp_predictor::{resolve, Burst};

    #[test]
    fn default_report_text() {
        let report = Report::new(None, resolve(None, None));
        let text = report.to_string();

        assert_eq!(report.variant, Some("300 kHz 4-beam 20° piston"));
        assert!(text.contains("300 kHz 4-beam 20° piston"));
        assert!(text.contains("Ensemble size"));
        assert!(text.contains("4396 bytes"));
        assert!(!text.contains("Bursts"));
        assert!(report.burst.is_none());
    }

    #[test]
    fn burst_section_when_active() {
        let config = resolve(SubsystemCode::parse("3"), None).with_burst(Burst {
            ensembles_per_burst: 2048,
            burst_interval_s: 3600.0,
            primary: SubsystemCode('3'),
            ..Burst::default()
        });
        let report = Report::new(Some(SubsystemCode('3')), config);

        let burst = report.burst.expect("burst result");
        assert_eq!(report.prediction.data_bytes, burst.data_bytes);
        assert!(report.to_string().contains("Bursts"));
    }

    #[test]
    fn implausible_plan_warns() {
        let config = resolve(SubsystemCode::parse("F"), None);
        let report = Report::new(Some(SubsystemCode('F')), config);

        assert!(!report.warnings.is_empty());
        assert!(report.to_string().contains("warning: "));
    }

    #[test]
    fn json_carries_every_section() {
        let report = Report::new(None, resolve(None, None));
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["prediction"]["ensemble_bytes"], 4396);
        assert_eq!(value["config"]["transducer"]["beams"], 4);
        assert!(value["burst"].is_null());
        assert!(value["warnings"].is_array());
    }
}
