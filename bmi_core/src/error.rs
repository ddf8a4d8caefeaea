//! Error types for the bmi_core library.

use crate::UnitSystem;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unit tag was neither "metric" nor "imperial"
    #[error("unit must be 'metric' or 'imperial'")]
    Unit,

    /// A value that must be a real number was not one
    #[error("{field} must be numeric")]
    NotNumeric { field: String },

    /// Weight or height was zero or negative
    #[error("weight and height must be > 0")]
    NonPositive,

    /// Inputs exceed the plausibility bounds of their unit system
    #[error("{}", unreasonable_message(.0))]
    Unreasonable(UnitSystem),

    /// Display precision was negative
    #[error("decimals must be a non-negative integer")]
    Decimals,

    /// Batch row lacks a weight or height key
    #[error("missing weight or height")]
    MissingField,

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn not_numeric(field: &str) -> Self {
        Error::NotNumeric {
            field: field.to_string(),
        }
    }

    /// True for errors caused by the measurement or display inputs,
    /// false for configuration problems.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Toml(_))
    }
}

fn unreasonable_message(unit: &UnitSystem) -> &'static str {
    match unit {
        UnitSystem::Metric => "unreasonable metric inputs: check units (m, kg)",
        UnitSystem::Imperial => "unreasonable imperial inputs: check units (in, lb)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::Unit.to_string(), "unit must be 'metric' or 'imperial'");
        assert_eq!(Error::not_numeric("weight").to_string(), "weight must be numeric");
        assert_eq!(
            Error::Unreasonable(UnitSystem::Imperial).to_string(),
            "unreasonable imperial inputs: check units (in, lb)"
        );
        assert_eq!(Error::MissingField.to_string(), "missing weight or height");
    }

    #[test]
    fn test_input_error_family() {
        assert!(Error::NonPositive.is_input_error());
        assert!(Error::Decimals.is_input_error());
        assert!(!Error::Config("bad".into()).is_input_error());
    }
}
