//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Assay: statistical profiler for tabular datasets
#[derive(Parser)]
#[command(name = "assay")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile a data file and write a statistical report
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the report JSON (default: <file>.report.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Strong-correlation cutoff on |r|
        #[arg(long, default_value = "0.5")]
        corr_threshold: f64,

        /// Z-score anomaly cutoff
        #[arg(long, default_value = "3.0")]
        z_threshold: f64,

        /// IQR fence multiplier
        #[arg(long, default_value = "1.5")]
        iqr_multiplier: f64,

        /// Number of histogram bins
        #[arg(long, default_value = "20")]
        bins: usize,

        /// Field delimiter (auto-detected if omitted)
        #[arg(short, long)]
        delimiter: Option<char>,
    },
}
