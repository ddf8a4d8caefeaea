//! Fixed-decimal rendering of BMI values.

use crate::validate::ensure_number;
use crate::{Config, Error, Result};

pub const DEFAULT_DECIMALS: i32 = 2;

/// Largest precision `core::fmt` accepts
const MAX_FMT_PRECISION: usize = u16::MAX as usize;

/// Render `bmi` with exactly `decimals` digits after the point.
///
/// Uses Rust's `{:.N}` float formatting, which rounds the exact binary
/// value with ties going to even.
pub fn format_bmi(bmi: f64, decimals: i32) -> Result<String> {
    ensure_number(bmi, "bmi")?;
    let precision = usize::try_from(decimals).map_err(|_| Error::Decimals)?;

    // Digits past the cap are always zero: an f64 has at most 1074
    // fractional binary digits, hence as many decimal ones.
    let shown = precision.min(MAX_FMT_PRECISION);
    let mut out = format!("{:.*}", shown, bmi);
    if bmi.is_finite() {
        out.extend(std::iter::repeat('0').take(precision - shown));
    }
    Ok(out)
}

/// Render `bmi` with [`DEFAULT_DECIMALS`] digits
pub fn format_bmi_default(bmi: f64) -> Result<String> {
    format_bmi(bmi, DEFAULT_DECIMALS)
}

/// Render `bmi` with the configured `display.decimals`
pub fn format_bmi_with_config(bmi: f64, config: &Config) -> Result<String> {
    format_bmi(bmi, config.display.decimals)
}
