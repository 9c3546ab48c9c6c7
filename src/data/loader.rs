//! CSV Data Loader Module
//! Reads the patient record table from disk using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
    #[error("no data rows in {0}")]
    Empty(PathBuf),
}

/// Load a CSV file into a DataFrame.
///
/// A missing file is a fatal startup error, reported separately from a
/// malformed one (e.g. a row with more fields than the header declares).
pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    if df.height() == 0 {
        return Err(LoaderError::Empty(path.to_path_buf()));
    }

    Ok(df)
}
