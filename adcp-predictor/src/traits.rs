//! Core traits for plausibility checks
//!
//! Keep them simple: a check reads a value and reports the first problem.

use crate::config::DeploymentConfig;
use crate::errors::ValidationResult;

/// A check over one kind of value
pub trait Validator {
    /// The type of value this validator checks
    type Value: ?Sized;

    /// First problem found in `value`, if any
    fn validate(&self, value: &Self::Value) -> ValidationResult<()>;
}

/// Values that can be checked for being usable numbers
pub trait Validatable {
    /// Not NaN or infinite
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for DeploymentConfig {
    fn is_valid(&self) -> bool {
        crate::validators::numeric_fields(self)
            .iter()
            .all(|(_, value)| value.is_valid())
    }
}
