//! Shared check helpers
//!
//! Pure functions returning the error for a single field, so every check
//! names fields the same way.

use crate::errors::{ConfigError, ValidationResult};
use crate::traits::Validatable;

/// `value` is a finite number
pub fn check_finite(field: &'static str, value: f64) -> ValidationResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field })
    }
}

/// `value` lies in `[min, max]`
pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ConfigError::OutOfRange { field, value, min, max })
    } else {
        Ok(())
    }
}

/// `value` is positive and at most `max`
pub fn check_positive(field: &'static str, value: f64, max: f64) -> ValidationResult<()> {
    if value <= 0.0 {
        Err(ConfigError::OutOfRange { field, value, min: 0.0, max })
    } else {
        check_range(field, value, 0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range("x", 5.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 0.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", -1.0, 0.0, 10.0).is_err());
        assert!(check_range("x", 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn positive_excludes_zero() {
        assert_eq!(
            check_positive("interval", 0.0, 10.0),
            Err(ConfigError::OutOfRange { field: "interval", value: 0.0, min: 0.0, max: 10.0 })
        );
        assert!(check_positive("interval", 0.5, 10.0).is_ok());
    }

    #[test]
    fn finite_check_names_field() {
        assert_eq!(
            check_finite("snr_db", f64::INFINITY),
            Err(ConfigError::InvalidValue { field: "snr_db" })
        );
    }
}
