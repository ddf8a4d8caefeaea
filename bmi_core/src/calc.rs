//! BMI calculation.
//!
//! - metric: BMI = kg / m^2
//! - imperial: BMI = (lb / in^2) * 703

use crate::{PlausibilityLimits, Result, UnitSystem};

/// Factor converting lb/in^2 to the kg/m^2 scale
pub const IMPERIAL_FACTOR: f64 = 703.0;

/// Calculate BMI using the default plausibility limits
pub fn calc_bmi(weight: f64, height: f64, unit: UnitSystem) -> Result<f64> {
    calc_bmi_with(weight, height, unit, &PlausibilityLimits::default())
}

/// Calculate BMI after validating against caller-supplied limits
///
/// The result is not rounded.
pub fn calc_bmi_with(
    weight: f64,
    height: f64,
    unit: UnitSystem,
    limits: &PlausibilityLimits,
) -> Result<f64> {
    crate::validate_inputs_with(weight, height, unit, limits)?;

    let ratio = weight / (height * height);
    let bmi = match unit {
        UnitSystem::Metric => ratio,
        UnitSystem::Imperial => ratio * IMPERIAL_FACTOR,
    };

    tracing::debug!("BMI for {} {} / {}: {}", unit, weight, height, bmi);
    Ok(bmi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_metric_values() {
        assert_close(calc_bmi(70.0, 1.75, UnitSystem::Metric).unwrap(), 22.857142857142858);
        assert_close(calc_bmi(60.0, 1.70, UnitSystem::Metric).unwrap(), 20.761245674740486);
        assert_close(calc_bmi(80.0, 1.80, UnitSystem::Metric).unwrap(), 24.691358024691358);
    }

    #[test]
    fn test_imperial_values() {
        assert_close(calc_bmi(154.0, 69.0, UnitSystem::Imperial).unwrap(), 22.73934047469019);
        assert_close(calc_bmi(180.0, 70.0, UnitSystem::Imperial).unwrap(), 25.824489795918367);
    }

    #[test]
    fn test_matches_formula() {
        for (w, h) in [(45.5, 1.52), (120.0, 1.95), (3.2, 0.5)] {
            assert_close(calc_bmi(w, h, UnitSystem::Metric).unwrap(), w / (h * h));
        }
        for (w, h) in [(100.0, 60.0), (250.0, 75.5)] {
            assert_close(
                calc_bmi(w, h, UnitSystem::Imperial).unwrap(),
                (w / (h * h)) * 703.0,
            );
        }
    }

    #[test]
    fn test_validation_propagates() {
        assert!(matches!(
            calc_bmi(0.0, 1.75, UnitSystem::Metric),
            Err(Error::NonPositive)
        ));
        assert!(matches!(
            calc_bmi(70.0, 175.0, UnitSystem::Metric),
            Err(Error::Unreasonable(UnitSystem::Metric))
        ));
    }
}
