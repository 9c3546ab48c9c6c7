//! Correlation Analysis Module
//! Pairwise Pearson correlation over the numeric measurement columns.

use crate::data::{numeric_columns, SchemaError};
use polars::prelude::*;
use serde::Serialize;

/// Symmetric matrix of pairwise Pearson coefficients.
///
/// The diagonal is exactly 1.0 and `get(i, j) == get(j, i)` by
/// construction. Degenerate pairs (fewer than two paired observations,
/// or a zero-variance series) are NaN.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// Pearson correlation coefficient over paired samples.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

/// Paired column values where both rows are non-null (pairwise-complete
/// observations, matching how pandas correlates columns with gaps).
fn paired_values(
    df: &DataFrame,
    a: &str,
    b: &str,
) -> Result<(Vec<f64>, Vec<f64>), SchemaError> {
    let ca = df.column(a)?.cast(&DataType::Float64)?;
    let cb = df.column(b)?.cast(&DataType::Float64)?;
    let ca = ca.f64()?;
    let cb = cb.f64()?;

    let mut xs = Vec::with_capacity(df.height());
    let mut ys = Vec::with_capacity(df.height());
    for (va, vb) in ca.into_iter().zip(cb) {
        if let (Some(x), Some(y)) = (va, vb) {
            xs.push(x);
            ys.push(y);
        }
    }
    Ok((xs, ys))
}

/// Compute the correlation matrix over the numeric columns of the frame.
/// Categorical columns never enter the computation.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix, SchemaError> {
    let columns = numeric_columns(df);
    let n = columns.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let (xs, ys) = paired_values(df, &columns[i], &columns[j])?;
            let r = pearson(&xs, &ys);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{mark_categorical, CATEGORICAL_COLUMNS};

    #[test]
    fn test_two_points_are_perfectly_inverse() {
        let r = pearson(&[38.0, 25.0], &[1.1, 1.9]);
        assert!((r + 1.0).abs() < 1e-12, "expected -1.0, got {}", r);
    }

    #[test]
    fn test_constant_series_is_nan() {
        let r = pearson(&[1.0, 1.0, 1.0], &[2.0, 3.0, 4.0]);
        assert!(r.is_nan());
    }

    #[test]
    fn test_too_few_points_is_nan() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let df = df!(
            "age" => [60.0f64, 75.0, 50.0, 82.0],
            "ejection_fraction" => [38.0f64, 25.0, 45.0, 20.0],
            "serum_creatinine" => [1.1f64, 1.9, 0.9, 2.4],
        )
        .unwrap();

        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert!(matrix.get(i, j) >= -1.0 - 1e-12);
                assert!(matrix.get(i, j) <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_categorical_columns_are_excluded() {
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

        let matrix = correlation_matrix(&df).unwrap();
        assert_eq!(
            matrix.columns,
            vec!["age", "ejection_fraction", "serum_creatinine"]
        );

        // Two rows: every off-diagonal coefficient is +/-1
        let r = matrix.get(1, 2);
        assert!((r + 1.0).abs() < 1e-12);
    }
}
