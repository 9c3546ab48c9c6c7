//! Correlation Heatmap Chart
//! Annotated grid of the numeric-only correlation matrix, viridis
//! color-mapped with rotated axis labels and a colorbar.

use crate::data::SchemaError;
use crate::stats::{correlation_matrix, CorrelationMatrix};
use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use polars::prelude::DataFrame;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;
const MARGIN_LEFT: i32 = 200;
const MARGIN_TOP: i32 = 70;
const MARGIN_BOTTOM: i32 = 190;
const MARGIN_RIGHT: i32 = 120;

const NAN_FILL: RGBColor = RGBColor(200, 200, 200);

/// Correlation matrix for the heatmap.
///
/// Recomputed from the frame's numeric columns on every call; the
/// reporter's matrix is never reused.
pub fn correlation_heatmap_data(df: &DataFrame) -> Result<CorrelationMatrix, SchemaError> {
    correlation_matrix(df)
}

/// Map a coefficient in [-1, 1] onto the viridis scale.
fn cell_color(r: f64) -> RGBColor {
    if !r.is_finite() {
        return NAN_FILL;
    }
    let t = ((r + 1.0) / 2.0).clamp(0.0, 1.0);
    ViridisRGB.get_color(t)
}

/// Black annotations on light cells, white on dark ones.
fn annotation_color(fill: RGBColor) -> RGBColor {
    let luminance = 0.299 * fill.0 as f64 + 0.587 * fill.1 as f64 + 0.114 * fill.2 as f64;
    if luminance < 140.0 {
        WHITE
    } else {
        BLACK
    }
}

/// Render the annotated heatmap as a 1200x800 PNG.
///
/// The grid is laid out manually: one filled cell per coefficient with
/// the value printed to two decimals, horizontal row labels on the
/// left, column labels rotated 90 degrees along the bottom, and a
/// vertical colorbar on the right.
pub fn render_correlation_heatmap(
    matrix: &CorrelationMatrix,
    output_path: &Path,
) -> crate::Result<()> {
    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let title_style = ("sans-serif", 28)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "Correlation Matrix of Clinical Features",
        (WIDTH as i32 / 2, 20),
        title_style.clone(),
    ))?;

    let n = matrix.len();
    if n == 0 {
        root.present()?;
        return Ok(());
    }

    let plot_w = WIDTH as i32 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT as i32 - MARGIN_TOP - MARGIN_BOTTOM;
    let cell_w = plot_w / n as i32;
    let cell_h = plot_h / n as i32;

    let annotation_font = ("sans-serif", 15).into_font();
    let label_style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    let rotated_style = ("sans-serif", 15)
        .into_font()
        .transform(FontTransform::Rotate90)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    for i in 0..n {
        for j in 0..n {
            let r = matrix.get(i, j);
            let fill = cell_color(r);
            let x0 = MARGIN_LEFT + j as i32 * cell_w;
            let y0 = MARGIN_TOP + i as i32 * cell_h;
            let (x1, y1) = (x0 + cell_w, y0 + cell_h);

            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], fill.filled()))?;
            // Thin separators between cells
            root.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHITE))?;

            let text = if r.is_finite() {
                format!("{:.2}", r)
            } else {
                "n/a".to_string()
            };
            let style = annotation_font
                .clone()
                .color(&annotation_color(fill))
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(
                text,
                (x0 + cell_w / 2, y0 + cell_h / 2),
                style,
            ))?;
        }

        // Row label, horizontal
        root.draw(&Text::new(
            matrix.columns[i].clone(),
            (MARGIN_LEFT - 8, MARGIN_TOP + i as i32 * cell_h + cell_h / 2),
            label_style.clone(),
        ))?;
    }

    // Column labels, rotated for legibility
    for j in 0..n {
        root.draw(&Text::new(
            matrix.columns[j].clone(),
            (
                MARGIN_LEFT + j as i32 * cell_w + cell_w / 2,
                MARGIN_TOP + plot_h + 10,
            ),
            rotated_style.clone(),
        ))?;
    }

    draw_colorbar(&root, MARGIN_LEFT + plot_w + 30, MARGIN_TOP, plot_h)?;

    root.present()?;
    Ok(())
}

/// Vertical viridis gradient with tick labels from +1 at the top down
/// to -1 at the bottom.
fn draw_colorbar(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    x: i32,
    y: i32,
    height: i32,
) -> crate::Result<()> {
    const BAR_WIDTH: i32 = 24;

    for row in 0..height {
        let t = 1.0 - row as f64 / (height - 1).max(1) as f64;
        let color = ViridisRGB.get_color(t);
        root.draw(&Rectangle::new(
            [(x, y + row), (x + BAR_WIDTH, y + row + 1)],
            color.filled(),
        ))?;
    }
    root.draw(&Rectangle::new(
        [(x, y), (x + BAR_WIDTH, y + height)],
        BLACK,
    ))?;

    let tick_style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (value, frac) in [(1.0, 0.0), (0.5, 0.25), (0.0, 0.5), (-0.5, 0.75), (-1.0, 1.0)] {
        let ty = y + (frac * height as f64) as i32;
        root.draw(&Text::new(
            format!("{:+.1}", value),
            (x + BAR_WIDTH + 6, ty),
            tick_style.clone(),
        ))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_single_numeric_column_is_one_by_one() {
        let df = df!("age" => [60.0f64, 75.0, 50.0]).unwrap();
        let matrix = correlation_heatmap_data(&df).unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.get(0, 0), 1.0);
    }

    #[test]
    fn test_cell_color_bounds() {
        // Extremes map to the ends of the scale, NaN to the gray fill
        assert_eq!(cell_color(f64::NAN), NAN_FILL);
        assert_ne!(cell_color(-1.0), cell_color(1.0));
    }

    #[test]
    fn test_annotation_contrast() {
        assert_eq!(annotation_color(RGBColor(20, 20, 60)), WHITE);
        assert_eq!(annotation_color(RGBColor(240, 240, 120)), BLACK);
    }

    #[test]
    fn test_render_writes_png() {
        let df = df!(
            "age" => [60.0f64, 75.0, 50.0, 82.0],
            "ejection_fraction" => [38.0f64, 25.0, 45.0, 20.0],
            "serum_creatinine" => [1.1f64, 1.9, 0.9, 2.4],
        )
        .unwrap();
        let matrix = correlation_heatmap_data(&df).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heatmap.png");
        render_correlation_heatmap(&matrix, &path).unwrap();
        assert!(path.exists());
    }
}
