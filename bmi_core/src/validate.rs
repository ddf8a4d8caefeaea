//! Input validation for weight/height pairs.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. Both values are real numbers (NaN is rejected)
//! 2. Both values are strictly positive
//! 3. Both values are within the plausibility bounds of the unit system
//!
//! The unit tag itself is checked when it is parsed into a [`UnitSystem`].

use crate::{Error, PlausibilityLimits, Result, UnitSystem};

/// Validate a weight/height pair against the default plausibility limits
pub fn validate_inputs(weight: f64, height: f64, unit: UnitSystem) -> Result<()> {
    validate_inputs_with(weight, height, unit, &PlausibilityLimits::default())
}

/// Validate a weight/height pair against caller-supplied limits
pub fn validate_inputs_with(
    weight: f64,
    height: f64,
    unit: UnitSystem,
    limits: &PlausibilityLimits,
) -> Result<()> {
    ensure_number(weight, "weight")?;
    ensure_number(height, "height")?;

    if weight <= 0.0 || height <= 0.0 {
        tracing::debug!("Rejected non-positive input: weight={}, height={}", weight, height);
        return Err(Error::NonPositive);
    }

    let (max_weight, max_height) = limits.bounds_for(unit);
    if height > max_height || weight > max_weight {
        tracing::debug!(
            "Rejected implausible {} input: weight={} (max {}), height={} (max {})",
            unit,
            weight,
            max_weight,
            height,
            max_height
        );
        return Err(Error::Unreasonable(unit));
    }

    Ok(())
}

/// Fail with a "must be numeric" error for NaN
pub(crate) fn ensure_number(value: f64, field: &str) -> Result<()> {
    if value.is_nan() {
        return Err(Error::not_numeric(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        assert!(validate_inputs(70.0, 1.75, UnitSystem::Metric).is_ok());
        assert!(validate_inputs(154.0, 69.0, UnitSystem::Imperial).is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        for (w, h) in [(0.0, 1.75), (70.0, 0.0), (-1.0, 1.75), (70.0, -0.5)] {
            let err = validate_inputs(w, h, UnitSystem::Metric).unwrap_err();
            assert!(matches!(err, Error::NonPositive), "({}, {}) gave {:?}", w, h, err);
            assert_eq!(err.to_string(), "weight and height must be > 0");
        }
    }

    #[test]
    fn test_nan_names_field() {
        let err = validate_inputs(f64::NAN, 1.75, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.to_string(), "weight must be numeric");

        let err = validate_inputs(70.0, f64::NAN, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.to_string(), "height must be numeric");
    }

    #[test]
    fn test_metric_bounds_inclusive() {
        assert!(validate_inputs(700.0, 2.7, UnitSystem::Metric).is_ok());

        // Centimeters passed as meters
        let err = validate_inputs(70.0, 175.0, UnitSystem::Metric).unwrap_err();
        assert_eq!(err.to_string(), "unreasonable metric inputs: check units (m, kg)");

        let err = validate_inputs(700.1, 1.75, UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, Error::Unreasonable(UnitSystem::Metric)));
    }

    #[test]
    fn test_imperial_bounds_inclusive() {
        assert!(validate_inputs(1540.0, 107.0, UnitSystem::Imperial).is_ok());

        let err = validate_inputs(150.0, 107.5, UnitSystem::Imperial).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unreasonable imperial inputs: check units (in, lb)"
        );

        let err = validate_inputs(1540.5, 69.0, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, Error::Unreasonable(UnitSystem::Imperial)));
    }

    #[test]
    fn test_infinite_fails_bounds() {
        let err = validate_inputs(f64::INFINITY, 1.75, UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, Error::Unreasonable(UnitSystem::Metric)));
    }

    #[test]
    fn test_custom_limits() {
        let limits = PlausibilityLimits {
            metric_max_height_m: 2.0,
            ..PlausibilityLimits::default()
        };
        assert!(validate_inputs_with(70.0, 2.0, UnitSystem::Metric, &limits).is_ok());
        assert!(validate_inputs_with(70.0, 2.1, UnitSystem::Metric, &limits).is_err());
    }
}
