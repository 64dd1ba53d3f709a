//! Example: Profile a tabular data file with Assay.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use assay::Assay;

fn main() -> assay::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Assay Profile: {}", file_path);
    println!("{}", separator);
    println!();

    let assay = Assay::new();
    let result = assay.analyze(path)?;
    let report = &result.report;

    println!("## Source");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!("## Column Statistics");
    println!();
    for (name, stats) in &report.basic_stats {
        println!("  {name} (n={})", stats.count);
        if let (Some(mean), Some(min), Some(max)) = (stats.mean, stats.min, stats.max) {
            println!("    mean={mean:.3} min={min:.3} max={max:.3}");
        }
        if let (Some(q1), Some(median), Some(q3)) = (stats.q1, stats.median, stats.q3) {
            println!("    q1={q1:.3} median={median:.3} q3={q3:.3}");
        }
    }
    println!();

    println!("## Missing Values");
    println!("  Total: {}", report.missing_values.total_missing);
    for (name, count) in &report.missing_values.missing_per_column {
        if *count > 0 {
            println!(
                "  {name}: {count} ({}%)",
                report.missing_values.missing_percentage[name]
            );
        }
    }
    println!();

    println!(
        "## Strong Correlations ({})",
        report.correlations.strong_correlations.len()
    );
    for pair in &report.correlations.strong_correlations {
        println!(
            "  {} ~ {}: r={:.3}",
            pair.column1, pair.column2, pair.correlation
        );
    }
    println!();

    println!("## Anomalies");
    for (name, anomalies) in &report.anomalies {
        let z = anomalies.z_score_anomalies.count;
        let iqr = anomalies.iqr_anomalies.count;
        if z > 0 || iqr > 0 {
            println!("  {name}: z-score={z} iqr={iqr}");
        }
    }

    Ok(())
}
