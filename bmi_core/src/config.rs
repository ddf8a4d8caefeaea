//! Configuration for plausibility limits, display and batch defaults.
//!
//! Nothing is read from disk; callers hand over a TOML string if they
//! want to override the defaults.

use crate::{Error, Result, UnitSystem};
use serde::{Deserialize, Serialize};

/// Library configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub limits: PlausibilityLimits,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

/// Upper bounds used to catch unit mix-ups (e.g. centimeters passed as meters).
///
/// Bounds are inclusive: a value equal to the limit passes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlausibilityLimits {
    #[serde(default = "default_metric_max_height_m")]
    pub metric_max_height_m: f64,

    #[serde(default = "default_metric_max_weight_kg")]
    pub metric_max_weight_kg: f64,

    #[serde(default = "default_imperial_max_height_in")]
    pub imperial_max_height_in: f64,

    #[serde(default = "default_imperial_max_weight_lb")]
    pub imperial_max_weight_lb: f64,
}

impl Default for PlausibilityLimits {
    fn default() -> Self {
        Self {
            metric_max_height_m: default_metric_max_height_m(),
            metric_max_weight_kg: default_metric_max_weight_kg(),
            imperial_max_height_in: default_imperial_max_height_in(),
            imperial_max_weight_lb: default_imperial_max_weight_lb(),
        }
    }
}

impl PlausibilityLimits {
    /// (max weight, max height) for a unit system
    pub fn bounds_for(&self, unit: UnitSystem) -> (f64, f64) {
        match unit {
            UnitSystem::Metric => (self.metric_max_weight_kg, self.metric_max_height_m),
            UnitSystem::Imperial => (self.imperial_max_weight_lb, self.imperial_max_height_in),
        }
    }
}

/// Display configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_decimals")]
    pub decimals: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

/// Batch processing configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct BatchConfig {
    #[serde(default)]
    pub unit: UnitSystem,
}

// Default value functions
fn default_metric_max_height_m() -> f64 {
    2.7 // tallest recorded human is ~2.72 m
}

fn default_metric_max_weight_kg() -> f64 {
    700.0
}

fn default_imperial_max_height_in() -> f64 {
    107.0 // 8'11"
}

fn default_imperial_max_weight_lb() -> f64 {
    1540.0
}

fn default_decimals() -> i32 {
    crate::DEFAULT_DECIMALS
}

impl Config {
    /// Parse configuration from TOML; missing sections fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        tracing::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check that limits are usable and precision is non-negative
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("metric_max_height_m", self.limits.metric_max_height_m),
            ("metric_max_weight_kg", self.limits.metric_max_weight_kg),
            ("imperial_max_height_in", self.limits.imperial_max_height_in),
            ("imperial_max_weight_lb", self.limits.imperial_max_weight_lb),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }

        if self.display.decimals < 0 {
            return Err(Error::Config(format!(
                "display.decimals must be non-negative, got {}",
                self.display.decimals
            )));
        }

        Ok(())
    }
}
