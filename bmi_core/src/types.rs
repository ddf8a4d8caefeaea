//! Core domain types for BMI computation.
//!
//! This module defines the values passed between the operations:
//! - Unit systems and measurements
//! - BMI categories
//! - Open-ended batch records

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Units and Measurements
// ============================================================================

/// Unit system of a weight/height pair
///
/// Metric is kilograms and meters; imperial is pounds and inches.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    /// Only the exact lowercase tags are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(Error::Unit),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single weight/height reading in a given unit system
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

impl Measurement {
    pub fn new(weight: f64, height: f64, unit: UnitSystem) -> Self {
        Self {
            weight,
            height,
            unit,
        }
    }

    pub fn validate(&self) -> Result<()> {
        crate::validate_inputs(self.weight, self.height, self.unit)
    }

    pub fn bmi(&self) -> Result<f64> {
        crate::calc_bmi(self.weight, self.height, self.unit)
    }
}

// ============================================================================
// Categories
// ============================================================================

/// Standard BMI category bands
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Batch Records
// ============================================================================

/// An open-ended batch row; key order is preserved.
pub type Record = serde_json::Map<String, serde_json::Value>;
