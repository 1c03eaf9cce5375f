//! Deployment predictor for acoustic Doppler current profilers
//!
//! Given a planned instrument configuration, predicts profiling range,
//! bottom-track range, velocity precision, data volume and the energy
//! budget of an unattended deployment.
//!
//! Key constraints:
//! - Pure arithmetic, no I/O, no allocation
//! - Never fails: degenerate input gives zeros, not errors
//! - Builds `no_std` (all transcendental math through `libm`)
//!
//! ```
//! use adcp_predictor::{predict_continuous, resolve, SubsystemCode};
//!
//! let config = resolve(SubsystemCode::parse("4"), None).with_duration_days(30.0);
//! let result = predict_continuous(&config);
//!
//! assert_eq!(result.ensembles, 30 * 86_400);
//! assert_eq!(result.ensemble_bytes, 4396);
//! println!("{:.0} m range, {:.1} battery packs", result.profile_range_m, result.battery_packs);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod burst;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hardware;
pub mod predict;
pub mod resolver;
pub mod sonar;
pub mod tables;
pub mod traits;
pub mod validators;

// Public API
pub use burst::{predict_burst, BurstPredictionResult};
pub use config::{
    Battery, BatteryType, BottomTrack, BottomTrackMode, Burst, DeploymentConfig, TransmitMode, Transducer,
    WaterProfile,
};
pub use errors::{ConfigError, ValidationResult};
pub use hardware::{FrequencyBand, HardwareVariant, SubsystemCode};
pub use predict::{predict_continuous, PowerBudget, PredictionResult};
pub use resolver::{apply_variant, resolve, ConfigOverrides, ResolveScope};
pub use sonar::SonarGeometry;
pub use traits::{Validatable, Validator};
pub use validators::{PlausibilityReport, PlausibilityValidator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
