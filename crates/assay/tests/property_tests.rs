//! Property-based tests for the analysis engine.
//!
//! These tests use proptest to generate random tables and verify that the
//! engine maintains its invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: the engine never crashes on any loadable table
//! 2. **Determinism**: same input always produces same output
//! 3. **Internal consistency**: related report fields agree with each other
//! 4. **Invariants**: core statistical properties always hold
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p assay --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p assay --test property_tests
//! ```

use proptest::prelude::*;

use assay::{analyze, AnalysisConfig, Report, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell that is either missing or a finite numeric value.
fn numeric_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => (-1.0e6f64..1.0e6).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
        1 => Just("NA".to_string()),
    ]
}

/// A cell for a text column.
fn text_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z]{1,8}",
        1 => Just(String::new()),
    ]
}

/// A table of 1-4 numeric columns and 0-1 text columns, 2-25 rows.
fn arbitrary_table() -> impl Strategy<Value = Table> {
    (1usize..=4, 0usize..=1, 2usize..=25).prop_flat_map(|(numeric_cols, text_cols, rows)| {
        let total = numeric_cols + text_cols;
        let row =
            prop::collection::vec(numeric_cell(), numeric_cols).prop_flat_map(move |num_part| {
                prop::collection::vec(text_cell(), text_cols).prop_map(move |text_part| {
                    let mut row = num_part.clone();
                    row.extend(text_part);
                    row
                })
            });

        prop::collection::vec(row, rows).prop_map(move |rows| {
            let header: Vec<String> = (0..total).map(|i| format!("col_{i}")).collect();
            Table::from_rows(header, rows).expect("generated table must load")
        })
    })
}

fn run(table: &Table) -> Report {
    analyze(table, &AnalysisConfig::default()).expect("analysis must not fail")
}

// =============================================================================
// Missing-Data Invariants
// =============================================================================

proptest! {
    /// Total missing always equals the per-column sum.
    #[test]
    fn prop_total_missing_is_column_sum(table in arbitrary_table()) {
        let report = run(&table);
        let sum: usize = report.missing_values.missing_per_column.values().sum();
        prop_assert_eq!(report.missing_values.total_missing, sum);
    }

    /// Every percentage is in [0, 100] and every column is covered.
    #[test]
    fn prop_missing_percentages_bounded(table in arbitrary_table()) {
        let report = run(&table);
        prop_assert_eq!(
            report.missing_values.missing_per_column.len(),
            table.column_count()
        );
        for &pct in report.missing_values.missing_percentage.values() {
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }
}

// =============================================================================
// Descriptive-Statistics Invariants
// =============================================================================

proptest! {
    /// Ordering invariants: std >= 0, min <= median <= max, q1 <= median <= q3.
    #[test]
    fn prop_stats_ordering(table in arbitrary_table()) {
        let report = run(&table);
        for stats in report.basic_stats.values() {
            if stats.count >= 2 {
                prop_assert!(stats.std.unwrap() >= 0.0);
            }
            if stats.count >= 1 {
                let min = stats.min.unwrap();
                let max = stats.max.unwrap();
                let median = stats.median.unwrap();
                let q1 = stats.q1.unwrap();
                let q3 = stats.q3.unwrap();
                prop_assert!(min <= median && median <= max);
                prop_assert!(q1 <= median && median <= q3);
            }
        }
    }

    /// Zero non-missing values means every statistic is None, never zero.
    #[test]
    fn prop_empty_columns_signal_null(table in arbitrary_table()) {
        let report = run(&table);
        for stats in report.basic_stats.values() {
            if stats.count == 0 {
                prop_assert_eq!(stats.mean, None);
                prop_assert_eq!(stats.std, None);
                prop_assert_eq!(stats.median, None);
                prop_assert_eq!(stats.skew, None);
                prop_assert_eq!(stats.kurtosis, None);
            }
        }
    }
}

// =============================================================================
// Correlation Invariants
// =============================================================================

proptest! {
    /// The matrix is symmetric with an all-or-nothing diagonal of 1.0.
    #[test]
    fn prop_matrix_symmetric(table in arbitrary_table()) {
        let report = run(&table);
        let m = &report.correlations.matrix;
        for i in 0..m.columns.len() {
            for j in 0..m.columns.len() {
                prop_assert_eq!(m.values[i][j], m.values[j][i]);
            }
            if let Some(diag) = m.values[i][i] {
                prop_assert_eq!(diag, 1.0);
            }
        }
    }

    /// Strong pairs are strictly above threshold, sorted by descending |r|,
    /// and never self-pairs.
    #[test]
    fn prop_strong_pairs_sorted_and_strict(table in arbitrary_table()) {
        let report = run(&table);
        let strong = &report.correlations.strong_correlations;
        for pair in strong {
            prop_assert!(pair.correlation.abs() > 0.5);
            prop_assert!((-1.0..=1.0).contains(&pair.correlation));
            prop_assert_ne!(&pair.column1, &pair.column2);
        }
        for w in strong.windows(2) {
            prop_assert!(w[0].correlation.abs() >= w[1].correlation.abs());
        }
    }
}

// =============================================================================
// Anomaly Invariants
// =============================================================================

proptest! {
    /// A constant column never produces z-score anomalies.
    #[test]
    fn prop_constant_column_no_z_anomalies(
        value in -1.0e6f64..1.0e6,
        rows in 2usize..40,
    ) {
        let table = Table::from_rows(
            vec!["c".to_string()],
            (0..rows).map(|_| vec![value.to_string()]).collect(),
        ).unwrap();

        let report = run(&table);
        prop_assert_eq!(report.anomalies["c"].z_score_anomalies.count, 0);
    }

    /// Every IQR-flagged row really lies outside the reported bounds, and
    /// every reported index is a valid non-missing source row.
    #[test]
    fn prop_iqr_flags_outside_bounds(table in arbitrary_table()) {
        let report = run(&table);
        for (name, anomalies) in &report.anomalies {
            let column = table.column(name).unwrap();
            let values: std::collections::HashMap<usize, f64> =
                column.numeric_values().into_iter().collect();

            let iqr = &anomalies.iqr_anomalies;
            let (Some(lower), Some(upper)) = (iqr.threshold_lower, iqr.threshold_upper) else {
                prop_assert_eq!(iqr.count, 0);
                continue;
            };
            for &row in &iqr.indices {
                let value = values[&row];
                prop_assert!(value < lower || value > upper);
            }
        }
    }

    /// Anomaly indices are ascending and within the row range.
    #[test]
    fn prop_anomaly_indices_ordered(table in arbitrary_table()) {
        let report = run(&table);
        for anomalies in report.anomalies.values() {
            for indices in [
                &anomalies.z_score_anomalies.indices,
                &anomalies.iqr_anomalies.indices,
            ] {
                for w in indices.windows(2) {
                    prop_assert!(w[0] < w[1]);
                }
                if let Some(&last) = indices.last() {
                    prop_assert!(last < table.row_count());
                }
            }
        }
    }
}

// =============================================================================
// Determinism and Boundary
// =============================================================================

proptest! {
    /// Two runs over the same table agree exactly, despite parallel stages.
    #[test]
    fn prop_analysis_deterministic(table in arbitrary_table()) {
        let first = run(&table);
        let second = run(&table);
        prop_assert_eq!(first.basic_stats, second.basic_stats);
        prop_assert_eq!(first.correlations, second.correlations);
        prop_assert_eq!(first.anomalies, second.anomalies);
    }

    /// JSON round-trip preserves every numeric field exactly.
    #[test]
    fn prop_json_round_trip(table in arbitrary_table()) {
        let report = run(&table);
        let json = report.to_json().unwrap();
        let restored = Report::from_json(&json).unwrap();

        prop_assert_eq!(report.basic_stats, restored.basic_stats);
        prop_assert_eq!(report.missing_values, restored.missing_values);
        prop_assert_eq!(report.correlations, restored.correlations);
        prop_assert_eq!(report.anomalies, restored.anomalies);
        prop_assert_eq!(report.visualizations, restored.visualizations);
    }
}
