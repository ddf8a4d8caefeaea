#![forbid(unsafe_code)]

//! Body Mass Index computation.
//!
//! This crate provides:
//! - Input validation with plausibility bounds per unit system
//! - BMI calculation (metric and imperial)
//! - Category classification and fixed-decimal display
//! - Batch processing with per-row error capture

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod validate;
pub mod calc;
pub mod category;
pub mod format;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, PlausibilityLimits};
pub use validate::{validate_inputs, validate_inputs_with};
pub use calc::{calc_bmi, calc_bmi_with};
pub use category::categorize_bmi;
pub use format::{format_bmi, format_bmi_default, format_bmi_with_config, DEFAULT_DECIMALS};
pub use batch::{batch_bmi, batch_bmi_with_config, BatchSummary};
