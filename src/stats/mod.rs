//! Statistics module - descriptive summaries and correlation analysis

mod correlation;
mod summary;

pub use correlation::{correlation_matrix, pearson, CorrelationMatrix};
pub use summary::{describe, ColumnSummary};
