//! Analyze command - profile a data file and write the report.

use std::path::PathBuf;

use colored::Colorize;

use assay::{AnalysisConfig, Assay, AssayConfig, ParserConfig};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    corr_threshold: f64,
    z_threshold: f64,
    iqr_multiplier: f64,
    bins: usize,
    delimiter: Option<char>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Profiling".cyan().bold(),
        file.display().to_string().white()
    );

    let config = AssayConfig {
        parser: ParserConfig {
            delimiter: delimiter.map(|c| c as u8),
            ..Default::default()
        },
        analysis: AnalysisConfig {
            strong_correlation_threshold: corr_threshold,
            z_score_threshold: z_threshold,
            iqr_multiplier,
            histogram_bins: bins,
            ..Default::default()
        },
    };

    let assay = Assay::with_config(config);
    let result = assay.analyze(&file)?;
    let report = &result.report;

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for (name, kind) in &report.metadata.column_kinds {
            println!("  {:24} {:?}", name, kind);
        }
        println!();
    }

    println!(
        "Analyzed {} rows across {} columns ({} numeric)",
        report.metadata.rows.to_string().white().bold(),
        report.metadata.columns.len().to_string().white().bold(),
        report.basic_stats.len().to_string().white().bold()
    );

    println!(
        "Missing cells: {}",
        report.missing_values.total_missing.to_string().yellow()
    );

    let strong = &report.correlations.strong_correlations;
    println!(
        "Strong correlations: {}",
        strong.len().to_string().white().bold()
    );
    for pair in strong.iter().take(5) {
        println!(
            "  {} ~ {}  r={:.3}",
            pair.column1.cyan(),
            pair.column2.cyan(),
            pair.correlation
        );
    }

    let flagged: usize = report
        .anomalies
        .values()
        .map(|a| a.z_score_anomalies.count + a.iqr_anomalies.count)
        .sum();
    println!("Anomaly flags: {}", flagged.to_string().red());

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let mut p = file.clone();
        let stem = p.file_stem().unwrap_or_default().to_string_lossy().into_owned();
        p.set_file_name(format!("{}.report.json", stem));
        p
    });

    std::fs::write(&output_path, report.to_json()?)?;

    println!();
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
