//! Plausibility Validation
//!
//! ## Overview
//!
//! The engines accept any configuration and never fail. That suits an
//! interactive planner, but a zero range or an empty data volume says nothing
//! about *why*. The validators here look at a configuration the way an
//! experienced operator would and name the problem.
//!
//! ## Validation Layers
//!
//! ### 1. Malformed Input
//! NaN or infinite fields, beam counts no head has, frequencies below every
//! table:
//! ```rust
//! use adcp_predictor::{ConfigError, DeploymentConfig, PlausibilityValidator, Validator};
//!
//! let mut config = DeploymentConfig::default();
//! config.transducer.beams = 2;
//! assert_eq!(
//!     PlausibilityValidator::default().validate(&config),
//!     Err(ConfigError::UnsupportedBeamCount { beams: 2 })
//! );
//! ```
//!
//! ### 2. Physical Limits
//! Geometry, sound speed and SNR within what the hardware and the ocean
//! allow. Limits come from the validator preset.
//!
//! ### 3. Timing
//! The pings of one ensemble must fit in the ensemble interval; the
//! ensembles of one burst must fit in the burst interval. A 38 kHz ping
//! round trip to 1000 m alone takes well over a second.
//!
//! ### 4. Outcome
//! Optionally, the configured bins must stay inside the predicted range,
//! and a battery pack must still hold energy after self discharge.
//!
//! ## Presets
//!
//! ```rust
//! use adcp_predictor::{resolve, PlausibilityValidator, SubsystemCode};
//!
//! let config = resolve(SubsystemCode::parse("E"), None).with_ensemble_interval(600.0);
//!
//! // Strict also compares the bins with the predicted range
//! let report = PlausibilityValidator::strict().report(&config);
//! for problem in report.iter() {
//!     println!("warning: {}", problem);
//! }
//!
//! // Wide-open limits for experiments
//! let lab = PlausibilityValidator::lenient();
//! # let _ = lab;
//! ```

mod plausibility;
mod utils;

pub use plausibility::{numeric_fields, PlausibilityReport, PlausibilityValidator, MAX_REPORTED_ERRORS};
