//! Console and JSON reporting for the computed statistics.

use crate::stats::{ColumnSummary, CorrelationMatrix};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Both statistics blocks, bundled for JSON export.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub descriptive: &'a [ColumnSummary],
    pub correlation: &'a CorrelationMatrix,
}

/// Print the descriptive statistics table to stdout.
pub fn print_descriptive(summaries: &[ColumnSummary]) {
    println!("\n=== Descriptive Statistics ===");
    println!(
        "{:<26} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in summaries {
        println!(
            "{:<26} {:>7} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            s.column, s.count, s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max
        );
    }
}

/// Print the correlation matrix to stdout, headers truncated so the
/// rows stay aligned for wide clinical column names.
pub fn print_correlation(matrix: &CorrelationMatrix) {
    println!("\n=== Correlation Matrix (Pearson) ===");

    let mut header = format!("{:<26}", "");
    for name in &matrix.columns {
        header.push_str(&format!(" {:>9}", truncate(name, 9)));
    }
    println!("{}", header);

    for (i, name) in matrix.columns.iter().enumerate() {
        let mut row = format!("{:<26}", truncate(name, 26));
        for j in 0..matrix.len() {
            row.push_str(&format!(" {:>9.3}", matrix.get(i, j)));
        }
        println!("{}", row);
    }
}

/// Write both statistics blocks as a JSON document.
pub fn write_json(
    path: &Path,
    summaries: &[ColumnSummary],
    matrix: &CorrelationMatrix,
) -> crate::Result<()> {
    let report = AnalysisReport {
        descriptive: summaries,
        correlation: matrix,
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &report)?;
    Ok(())
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        s
    } else {
        &s[..max]
    }
}
