//! Command-line interface definitions and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Exploratory data analysis CLI for the heart failure clinical records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg(short, long, default_value = "heart_data_set.csv")]
    pub input: PathBuf,

    /// Directory where the chart images are written
    #[arg(short, long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Optional path for a JSON statistics report
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Destination path for a chart image inside the output directory.
    pub fn chart_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_path() {
        let args = Args {
            input: PathBuf::from("test.csv"),
            out_dir: PathBuf::from("out"),
            json: None,
            verbose: false,
        };

        assert_eq!(
            args.chart_path("age_distribution.png"),
            PathBuf::from("out/age_distribution.png")
        );
    }
}
