//! Batch BMI computation over open-ended records.
//!
//! Each row is processed independently. A failing row gets an `error`
//! field instead of `bmi`/`category`; the batch itself never fails and
//! always returns one output row per input row, in order.

use crate::{categorize_bmi, calc_bmi_with, BmiCategory, Config, Error, PlausibilityLimits};
use crate::{Record, Result, UnitSystem};
use serde::Serialize;
use serde_json::Value;

pub const WEIGHT_KEY: &str = "weight";
pub const HEIGHT_KEY: &str = "height";
pub const BMI_KEY: &str = "bmi";
pub const CATEGORY_KEY: &str = "category";
pub const ERROR_KEY: &str = "error";

/// Compute BMI for every row using the default plausibility limits
pub fn batch_bmi<I>(rows: I, unit: UnitSystem) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    run_batch(rows, unit, &PlausibilityLimits::default())
}

/// Compute BMI for every row using the configured unit and limits
pub fn batch_bmi_with_config<I>(rows: I, config: &Config) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    run_batch(rows, config.batch.unit, &config.limits)
}

fn run_batch<I>(rows: I, unit: UnitSystem, limits: &PlausibilityLimits) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    let out: Vec<Record> = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| process_row(index, row, unit, limits))
        .collect();

    let summary = BatchSummary::of(&out);
    tracing::info!(
        "Processed {} rows ({} succeeded, {} failed)",
        summary.total,
        summary.succeeded,
        summary.failed
    );

    out
}

fn process_row(
    index: usize,
    mut row: Record,
    unit: UnitSystem,
    limits: &PlausibilityLimits,
) -> Record {
    match evaluate_row(&row, unit, limits) {
        Ok((bmi, category)) => {
            tracing::debug!("Row {}: bmi={} category={}", index, bmi, category);
            // Non-finite values become null
            row.insert(BMI_KEY.to_string(), Value::from(bmi));
            row.insert(CATEGORY_KEY.to_string(), Value::from(category.as_str()));
        }
        Err(e) => {
            tracing::warn!("Row {} skipped: {}", index, e);
            row.insert(ERROR_KEY.to_string(), Value::from(e.to_string()));
        }
    }
    row
}

fn evaluate_row(
    row: &Record,
    unit: UnitSystem,
    limits: &PlausibilityLimits,
) -> Result<(f64, BmiCategory)> {
    let (Some(weight), Some(height)) = (row.get(WEIGHT_KEY), row.get(HEIGHT_KEY)) else {
        return Err(Error::MissingField);
    };

    let weight = numeric_value(weight, WEIGHT_KEY)?;
    let height = numeric_value(height, HEIGHT_KEY)?;

    let bmi = calc_bmi_with(weight, height, unit, limits)?;
    let category = categorize_bmi(bmi)?;
    Ok((bmi, category))
}

/// Only JSON numbers count; booleans, strings and null do not
fn numeric_value(value: &Value, field: &str) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| Error::not_numeric(field)),
        _ => Err(Error::not_numeric(field)),
    }
}

/// Outcome counts for a processed batch
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Count rows in batch output; a row is failed if it carries `error`
    pub fn of(rows: &[Record]) -> Self {
        let failed = rows.iter().filter(|r| r.contains_key(ERROR_KEY)).count();
        Self {
            total: rows.len(),
            succeeded: rows.len() - failed,
            failed,
        }
    }
}
