//! Schema Normalizer Module
//! Reinterprets the binary indicator columns as categorical and provides
//! the numeric-column filtering every downstream statistic relies on.

use polars::prelude::*;
use thiserror::Error;

/// Binary indicator columns that must be treated as nominal labels,
/// never as numeric measurements.
pub const CATEGORICAL_COLUMNS: [&str; 6] = [
    "anaemia",
    "diabetes",
    "high_blood_pressure",
    "sex",
    "smoking",
    "DEATH_EVENT",
];

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("column is not numeric: {0}")]
    NotNumeric(String),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Reinterpret the named columns as categorical labels.
///
/// All columns are validated before any cast runs, so a missing column
/// fails the pipeline before statistics are computed. The cast goes
/// through String so the 0/1 indicators become nominal labels rather
/// than dictionary-encoded integers.
pub fn mark_categorical(df: DataFrame, columns: &[&str]) -> Result<DataFrame, SchemaError> {
    for name in columns {
        if df.column(name).is_err() {
            return Err(SchemaError::MissingColumn(name.to_string()));
        }
    }

    let casts: Vec<Expr> = columns
        .iter()
        .map(|name| {
            col(*name)
                .cast(DataType::String)
                .cast(DataType::Categorical(None, CategoricalOrdering::Physical))
        })
        .collect();

    Ok(df.lazy().with_columns(casts).collect()?)
}

/// Names of the numeric columns, in frame order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| {
            matches!(
                col.dtype(),
                DataType::Float32
                    | DataType::Float64
                    | DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            )
        })
        .map(|col| col.name().to_string())
        .collect()
}

/// Extract a numeric column as f64 values, skipping nulls.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, SchemaError> {
    let column = df
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name.to_string()))?;

    if !numeric_columns(df).iter().any(|c| c == name) {
        return Err(SchemaError::NotNumeric(name.to_string()));
    }

    let casted = column.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().flatten().collect())
}
