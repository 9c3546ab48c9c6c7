//! Data module - CSV loading and schema normalization

mod loader;
mod schema;

pub use loader::{load_csv, LoaderError};
pub use schema::{
    mark_categorical, numeric_columns, numeric_values, SchemaError, CATEGORICAL_COLUMNS,
};
