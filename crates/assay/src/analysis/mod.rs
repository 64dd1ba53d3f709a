//! The analysis engine: four independent stages plus visualization shaping.
//!
//! Every invocation is a pure function from `(Table, AnalysisConfig)` to
//! [`Report`]. The four stages read the same immutable table snapshot and
//! never share mutable state, so they are scheduled as parallel tasks and
//! joined before the visualization stage consumes their outputs.

pub mod anomaly;
pub mod correlation;
pub mod descriptive;
pub mod missing;
pub mod visualization;

use crate::error::AnalysisError;
use crate::report::{Report, ReportMetadata};
use crate::table::Table;

pub use anomaly::{ColumnAnomalies, IqrAnomalies, ZScoreAnomalies};
pub use correlation::{CorrelationMatrix, CorrelationPair, Correlations};
pub use descriptive::ColumnStats;
pub use missing::MissingSummary;
pub use visualization::{BoxPlot, Heatmap, Histogram, VisualizationData};

/// Tunable thresholds for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Minimum |r| (strict) for a pair to count as strongly correlated.
    pub strong_correlation_threshold: f64,
    /// |z| cutoff for the Z-score detector.
    pub z_score_threshold: f64,
    /// IQR multiplier for the fence bounds.
    pub iqr_multiplier: f64,
    /// Number of equal-width histogram bins.
    pub histogram_bins: usize,
    /// Cap on reported anomaly indices per column and method.
    pub max_anomaly_indices: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strong_correlation_threshold: 0.5,
            z_score_threshold: 3.0,
            iqr_multiplier: 1.5,
            histogram_bins: 20,
            max_anomaly_indices: 100,
        }
    }
}

impl AnalysisConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.strong_correlation_threshold.is_finite() || self.strong_correlation_threshold < 0.0
        {
            return Err(AnalysisError::Config(format!(
                "strong_correlation_threshold must be finite and non-negative, got {}",
                self.strong_correlation_threshold
            )));
        }
        if !self.z_score_threshold.is_finite() || self.z_score_threshold <= 0.0 {
            return Err(AnalysisError::Config(format!(
                "z_score_threshold must be finite and positive, got {}",
                self.z_score_threshold
            )));
        }
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(AnalysisError::Config(format!(
                "iqr_multiplier must be finite and non-negative, got {}",
                self.iqr_multiplier
            )));
        }
        if self.histogram_bins == 0 {
            return Err(AnalysisError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Run the full analysis over a table snapshot.
///
/// Stages 2-5 (descriptive, missing, correlation, anomaly) run as parallel
/// tasks; their results are joined before visualization assembly. The table
/// is never mutated and no state survives the call.
pub fn analyze(table: &Table, config: &AnalysisConfig) -> Result<Report, AnalysisError> {
    config.validate()?;

    let ((basic_stats, missing_values), (correlations, anomalies)) = rayon::join(
        || {
            rayon::join(
                || descriptive::analyze(table),
                || missing::summarize(table),
            )
        },
        || {
            rayon::join(
                || correlation::analyze(table, config.strong_correlation_threshold),
                || {
                    anomaly::detect_all(
                        table,
                        config.z_score_threshold,
                        config.iqr_multiplier,
                        config.max_anomaly_indices,
                    )
                },
            )
        },
    );

    let visualizations =
        visualization::build(table, &basic_stats, &correlations, config.histogram_bins);

    Ok(Report {
        basic_stats,
        missing_values,
        correlations,
        anomalies,
        visualizations,
        metadata: ReportMetadata::from_table(table),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> Table {
        Table::from_rows(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_bins_rejected() {
        let config = AnalysisConfig {
            histogram_bins: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_z_threshold_rejected() {
        let config = AnalysisConfig {
            z_score_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let table = make_table(
            vec!["a", "b", "c"],
            vec![
                vec!["1", "5", "x"],
                vec!["2", "4", "y"],
                vec!["NA", "3", "z"],
                vec!["4", "2", ""],
                vec!["5", "1", "w"],
            ],
        );
        let config = AnalysisConfig::default();

        let first = analyze(&table, &config).unwrap();
        let second = analyze(&table, &config).unwrap();

        // Parallel scheduling must not leak into the output.
        assert_eq!(first.basic_stats, second.basic_stats);
        assert_eq!(first.missing_values, second.missing_values);
        assert_eq!(first.correlations, second.correlations);
        assert_eq!(first.anomalies, second.anomalies);
        assert_eq!(first.visualizations, second.visualizations);
    }

    #[test]
    fn test_stage_outputs_joined_into_report() {
        let table = make_table(
            vec!["a", "b"],
            vec![vec!["1", "2"], vec!["2", "4"], vec!["3", "6"]],
        );
        let report = analyze(&table, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.basic_stats.len(), 2);
        assert_eq!(report.missing_values.total_missing, 0);
        assert_eq!(report.correlations.strong_correlations.len(), 1);
        assert_eq!(report.anomalies.len(), 2);
        assert_eq!(report.visualizations.histograms.len(), 2);
        assert_eq!(report.metadata.rows, 3);
    }
}
