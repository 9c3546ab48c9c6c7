//! Heartlens - heart failure clinical records EDA
//!
//! This is the main entrypoint that orchestrates loading, schema
//! normalization, statistics reporting, and static chart generation.

use anyhow::{Context, Result};
use clap::Parser;
use heartlens::{charts, data, report, stats, Args};
use std::fs;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();
    run_pipeline(&args)
}

/// Run the full analysis pipeline, strictly sequential:
/// load -> normalize -> statistics -> three charts.
fn run_pipeline(args: &Args) -> Result<()> {
    println!("=== Heart Failure Clinical Records EDA ===\n");

    let start_time = Instant::now();

    // Step 1: Load the record table
    if args.verbose {
        println!("Step 1: Loading data");
        println!("  Input file: {}", args.input.display());
    }

    let load_start = Instant::now();
    let df = data::load_csv(&args.input)?;
    println!("✓ Loaded {} rows, {} columns", df.height(), df.width());
    if args.verbose {
        println!("  Load time: {:.2}s", load_start.elapsed().as_secs_f64());
    }

    // Step 2: Normalize the binary indicators to categorical
    let df = data::mark_categorical(df, &data::CATEGORICAL_COLUMNS)?;
    if args.verbose {
        println!("\nStep 2: Schema normalization");
        println!("  Categorical columns: {}", data::CATEGORICAL_COLUMNS.join(", "));
        println!("  Numeric columns: {}", data::numeric_columns(&df).join(", "));
    }

    // Step 3: Descriptive statistics and correlation analysis
    let summaries = stats::describe(&df)?;
    report::print_descriptive(&summaries);

    let matrix = stats::correlation_matrix(&df)?;
    report::print_correlation(&matrix);

    if let Some(json_path) = &args.json {
        report::write_json(json_path, &summaries, &matrix)
            .with_context(|| format!("writing JSON report to {}", json_path.display()))?;
        println!("\n✓ JSON report saved to: {}", json_path.display());
    }

    // Step 4: Static charts
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output directory {}", args.out_dir.display()))?;

    let chart_start = Instant::now();

    let histogram = charts::age_distribution(&df)?;
    let path = args.chart_path("age_distribution.png");
    charts::render_age_distribution(&histogram, &path)?;
    println!("\n✓ Age distribution saved to: {}", path.display());

    let scatter = charts::outcome_scatter(&df)?;
    let path = args.chart_path("ef_vs_serum_creatinine.png");
    charts::render_outcome_scatter(&scatter, &path)?;
    println!("✓ Outcome scatter saved to: {}", path.display());

    // Recomputed from the frame, independent of the reporter's matrix
    let heatmap = charts::correlation_heatmap_data(&df)?;
    let path = args.chart_path("correlation_heatmap.png");
    charts::render_correlation_heatmap(&heatmap, &path)?;
    println!("✓ Correlation heatmap saved to: {}", path.display());

    if args.verbose {
        println!(
            "  Chart rendering time: {:.2}s",
            chart_start.elapsed().as_secs_f64()
        );
    }

    println!("\n=== Analysis Complete ===");
    println!(
        "Total processing time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
