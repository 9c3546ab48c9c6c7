//! Descriptive Statistics Module
//! Per-column summaries for the numeric measurements.

use crate::data::{numeric_columns, numeric_values, SchemaError};
use polars::prelude::DataFrame;
use serde::Serialize;

/// Summary statistics for a single numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Compute a summary over raw values. Empty input yields NaN fields.
    pub fn from_values(column: &str, values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                column: column.to_string(),
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q1: f64::NAN,
                median: f64::NAN,
                q3: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;

        // Sample standard deviation (ddof = 1)
        let std = if n > 1 {
            (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Self {
            column: column.to_string(),
            count: n,
            mean,
            std,
            min: sorted[0],
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }
}

/// Calculate percentile using linear interpolation (NumPy compatible).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Compute descriptive statistics for every numeric column, in frame
/// order. Categorical columns are excluded by the dtype filter.
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnSummary>, SchemaError> {
    let mut summaries = Vec::new();
    for name in numeric_columns(df) {
        let values = numeric_values(df, &name)?;
        summaries.push(ColumnSummary::from_values(&name, &values));
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{mark_categorical, CATEGORICAL_COLUMNS};
    use polars::prelude::*;

    #[test]
    fn test_two_patient_age_mean() {
        let summary = ColumnSummary::from_values("age", &[60.0, 75.0]);
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 67.5).abs() < 1e-12);
        assert_eq!(summary.min, 60.0);
        assert_eq!(summary.max, 75.0);
    }

    #[test]
    fn test_numpy_style_quartiles() {
        let summary = ColumnSummary::from_values("x", &[1.0, 2.0, 3.0, 4.0]);
        assert!((summary.q1 - 1.75).abs() < 1e-12);
        assert!((summary.median - 2.5).abs() < 1e-12);
        assert!((summary.q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std() {
        let summary = ColumnSummary::from_values("x", &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        // Known dataset: population std 2.0, sample std sqrt(32/7)
        assert!((summary.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_column_is_nan() {
        let summary = ColumnSummary::from_values("x", &[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
        assert!(summary.std.is_nan());
    }

    #[test]
    fn test_describe_excludes_categorical_columns() {
        let df = df!(
            "age" => [60.0f64, 75.0],
            "ejection_fraction" => [38i64, 25],
            "serum_creatinine" => [1.1f64, 1.9],
            "anaemia" => [0i64, 1],
            "diabetes" => [1i64, 0],
            "high_blood_pressure" => [0i64, 1],
            "sex" => [1i64, 0],
            "smoking" => [0i64, 0],
            "DEATH_EVENT" => [0i64, 1],
        )
        .unwrap();
        let df = mark_categorical(df, &CATEGORICAL_COLUMNS).unwrap();

        let summaries = describe(&df).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(names, vec!["age", "ejection_fraction", "serum_creatinine"]);

        let age = &summaries[0];
        assert!((age.mean - 67.5).abs() < 1e-12);
    }
}
