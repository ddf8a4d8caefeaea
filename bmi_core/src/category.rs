//! BMI classification.
//!
//! CDC/WHO bands, half-open and checked in order:
//! - <18.5: Underweight
//! - 18.5 to <25.0: Normal
//! - 25.0 to <30.0: Overweight
//! - >=30.0: Obesity

use crate::validate::ensure_number;
use crate::{BmiCategory, Result};

/// Map a BMI value to its category
///
/// No sanity bounds are applied to `bmi`; callers are expected to have
/// validated the measurement it came from.
pub fn categorize_bmi(bmi: f64) -> Result<BmiCategory> {
    ensure_number(bmi, "bmi")?;

    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    };

    Ok(category)
}
