//! Age Distribution Chart
//! Binned frequency histogram over the age column with a Gaussian KDE
//! overlay scaled to expected bin counts.

use crate::data::{numeric_values, SchemaError};
use plotters::prelude::*;
use polars::prelude::DataFrame;
use statrs::distribution::{Continuous, Normal};
use std::path::Path;

pub const AGE_COLUMN: &str = "age";
pub const BIN_COUNT: usize = 30;

/// Grid resolution of the density curve.
const KDE_POINTS: usize = 200;

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235); // sky blue
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Plot data for the age histogram: equal-width bins plus a smoothed
/// density estimate, both in frequency (count) units.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDistribution {
    /// Bin boundaries, `BIN_COUNT + 1` entries.
    pub bin_edges: Vec<f64>,
    /// Frequency per bin, `BIN_COUNT` entries.
    pub counts: Vec<usize>,
    /// KDE curve as (age, expected count) points.
    pub density: Vec<(f64, f64)>,
    pub sample_size: usize,
}

impl AgeDistribution {
    pub fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self {
                bin_edges: Vec::new(),
                counts: Vec::new(),
                density: Vec::new(),
                sample_size: 0,
            };
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let width = if max > min {
            (max - min) / BIN_COUNT as f64
        } else {
            1.0
        };

        let mut counts = vec![0usize; BIN_COUNT];
        for &v in values {
            let idx = (((v - min) / width) as usize).min(BIN_COUNT - 1);
            counts[idx] += 1;
        }

        let bin_edges: Vec<f64> = (0..=BIN_COUNT).map(|i| min + i as f64 * width).collect();
        let density = kde_curve(values, min, max, width);

        Self {
            bin_edges,
            counts,
            density,
            sample_size: n,
        }
    }

    /// Iterate bins as (left edge, right edge, count).
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.bin_edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }
}

/// Gaussian KDE with Scott's-rule bandwidth, scaled from a probability
/// density to the expected count per bin so the curve overlays the bars.
fn kde_curve(values: &[f64], min: f64, max: f64, bin_width: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt();
    let bandwidth = if std > 0.0 {
        std * (n as f64).powf(-0.2)
    } else {
        1.0
    };

    let Ok(kernel) = Normal::new(0.0, 1.0) else {
        return Vec::new();
    };

    let step = (max - min) / (KDE_POINTS - 1) as f64;
    (0..KDE_POINTS)
        .map(|i| {
            let x = min + i as f64 * step;
            let density = values
                .iter()
                .map(|&v| kernel.pdf((x - v) / bandwidth))
                .sum::<f64>()
                / (n as f64 * bandwidth);
            (x, density * n as f64 * bin_width)
        })
        .collect()
}

/// Compute the age histogram data from the record table.
pub fn age_distribution(df: &DataFrame) -> Result<AgeDistribution, SchemaError> {
    let values = numeric_values(df, AGE_COLUMN)?;
    Ok(AgeDistribution::from_values(&values))
}

/// Render the histogram as a 1000x600 PNG.
pub fn render_age_distribution(data: &AgeDistribution, output_path: &Path) -> crate::Result<()> {
    let root = BitMapBackend::new(output_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = data.bin_edges.first().copied().unwrap_or(0.0);
    let x_max = data.bin_edges.last().copied().unwrap_or(1.0);
    let peak = data
        .counts
        .iter()
        .map(|&c| c as f64)
        .chain(data.density.iter().map(|&(_, d)| d))
        .fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Age Distribution of Patients", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..peak * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Age")
        .y_desc("Frequency")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(data.bins().map(|(left, right, count)| {
        let mut bar = Rectangle::new([(left, 0.0), (right, count as f64)], BAR_COLOR.mix(0.6).filled());
        bar.set_margin(0, 0, 1, 1);
        bar
    }))?;

    if !data.density.is_empty() {
        chart.draw_series(LineSeries::new(
            data.density.iter().copied(),
            CURVE_COLOR.stroke_width(2),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn sample_ages() -> Vec<f64> {
        (0..60).map(|i| 40.0 + (i % 20) as f64 * 2.5).collect()
    }

    #[test]
    fn test_counts_cover_every_sample() {
        let data = AgeDistribution::from_values(&sample_ages());
        assert_eq!(data.bin_edges.len(), BIN_COUNT + 1);
        assert_eq!(data.counts.len(), BIN_COUNT);
        assert_eq!(data.counts.iter().sum::<usize>(), 60);
        assert_eq!(data.sample_size, 60);
    }

    #[test]
    fn test_density_is_nonnegative_and_covers_range() {
        let data = AgeDistribution::from_values(&sample_ages());
        assert!(!data.density.is_empty());
        assert!(data.density.iter().all(|&(_, d)| d >= 0.0));
        let (first_x, _) = data.density[0];
        let (last_x, _) = *data.density.last().unwrap();
        assert!((first_x - data.bin_edges[0]).abs() < 1e-9);
        assert!((last_x - data.bin_edges[BIN_COUNT]).abs() < 1e-9);
    }

    #[test]
    fn test_identical_values_use_unit_width_bins() {
        let data = AgeDistribution::from_values(&[55.0, 55.0, 55.0]);
        assert_eq!(data.counts[0], 3);
        assert_eq!(data.counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_same_table_gives_same_plot_data() {
        let df = df!("age" => [60.0f64, 75.0, 50.0, 62.0]).unwrap();
        let a = age_distribution(&df).unwrap();
        let b = age_distribution(&df).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("age.png");
        let data = AgeDistribution::from_values(&sample_ages());

        render_age_distribution(&data, &path).unwrap();
        assert!(path.exists());
    }
}
