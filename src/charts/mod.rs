//! Charts module - static chart generation
//!
//! Each chart is split into a pure "compute plot data" step over the
//! record table and a Plotters "render to PNG" step, so the
//! computational part is testable without an image backend.

mod heatmap;
mod histogram;
mod scatter;

pub use heatmap::{correlation_heatmap_data, render_correlation_heatmap};
pub use histogram::{age_distribution, render_age_distribution, AgeDistribution};
pub use scatter::{outcome_scatter, render_outcome_scatter, OutcomeScatter};
