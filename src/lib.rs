//! Heartlens: exploratory data analysis for the heart failure clinical
//! records dataset.
//!
//! The library loads the record table with Polars, normalizes the binary
//! indicator columns to categorical, computes descriptive and correlation
//! statistics, and renders three static charts with Plotters.

pub mod charts;
pub mod cli;
pub mod data;
pub mod report;
pub mod stats;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_csv, mark_categorical, numeric_columns, CATEGORICAL_COLUMNS};
pub use stats::{correlation_matrix, describe, ColumnSummary, CorrelationMatrix};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
