//! Outcome Scatter Chart
//! Ejection fraction vs serum creatinine, colored and shaped by the
//! death event outcome.

use crate::data::SchemaError;
use plotters::prelude::*;
use polars::prelude::*;
use std::path::Path;

pub const X_COLUMN: &str = "ejection_fraction";
pub const Y_COLUMN: &str = "serum_creatinine";
pub const OUTCOME_COLUMN: &str = "DEATH_EVENT";

/// Fixed visual weight for every marker.
const MARKER_SIZE: i32 = 5;

const SURVIVED_COLOR: RGBColor = RGBColor(52, 152, 219); // blue
const DECEASED_COLOR: RGBColor = RGBColor(231, 76, 60); // red

/// Scatter points partitioned by outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeScatter {
    pub survived: Vec<(f64, f64)>,
    pub deceased: Vec<(f64, f64)>,
}

impl OutcomeScatter {
    pub fn len(&self) -> usize {
        self.survived.len() + self.deceased.len()
    }

    pub fn is_empty(&self) -> bool {
        self.survived.is_empty() && self.deceased.is_empty()
    }

    fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in self.survived.iter().chain(&self.deceased) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_min.is_infinite() {
            return ((0.0, 1.0), (0.0, 1.0));
        }
        let x_pad = ((x_max - x_min) * 0.05).max(0.5);
        let y_pad = ((y_max - y_min) * 0.05).max(0.1);
        ((x_min - x_pad, x_max + x_pad), (y_min - y_pad, y_max + y_pad))
    }
}

/// A label counts as deceased when it parses to a non-zero number. The
/// outcome column is read through a String cast so this works on the
/// post-normalization categorical column as well as on raw integers.
fn is_deceased(label: &str) -> bool {
    label.trim().parse::<f64>().map(|v| v != 0.0).unwrap_or(false)
}

/// Partition the (ejection_fraction, serum_creatinine) points by the
/// death event outcome, skipping rows with any missing field.
pub fn outcome_scatter(df: &DataFrame) -> Result<OutcomeScatter, SchemaError> {
    let x_col = df
        .column(X_COLUMN)
        .map_err(|_| SchemaError::MissingColumn(X_COLUMN.to_string()))?
        .cast(&DataType::Float64)?;
    let y_col = df
        .column(Y_COLUMN)
        .map_err(|_| SchemaError::MissingColumn(Y_COLUMN.to_string()))?
        .cast(&DataType::Float64)?;
    let outcome = df
        .column(OUTCOME_COLUMN)
        .map_err(|_| SchemaError::MissingColumn(OUTCOME_COLUMN.to_string()))?
        .cast(&DataType::String)?;

    let xs = x_col.f64()?;
    let ys = y_col.f64()?;
    let labels = outcome.str()?;

    let mut survived = Vec::new();
    let mut deceased = Vec::new();
    for i in 0..df.height() {
        if let (Some(x), Some(y), Some(label)) = (xs.get(i), ys.get(i), labels.get(i)) {
            if is_deceased(label) {
                deceased.push((x, y));
            } else {
                survived.push((x, y));
            }
        }
    }

    Ok(OutcomeScatter { survived, deceased })
}

/// Render the scatter as a 1000x600 PNG with a two-entry legend.
pub fn render_outcome_scatter(data: &OutcomeScatter, output_path: &Path) -> crate::Result<()> {
    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = data.bounds();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Ejection Fraction vs. Serum Creatinine by Death Event",
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Ejection Fraction (%)")
        .y_desc("Serum Creatinine (mg/dL)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(
            data.survived
                .iter()
                .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, SURVIVED_COLOR.filled())),
        )?
        .label("Survived")
        .legend(|(x, y)| Circle::new((x, y), MARKER_SIZE, SURVIVED_COLOR.filled()));

    chart
        .draw_series(
            data.deceased
                .iter()
                .map(|&(x, y)| TriangleMarker::new((x, y), MARKER_SIZE, DECEASED_COLOR.filled())),
        )?
        .label("Deceased")
        .legend(|(x, y)| TriangleMarker::new((x, y), MARKER_SIZE, DECEASED_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
