//! Missing-data summary over all columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Per-column and total missing-value counts.
///
/// Covers every column, numeric and text alike, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    /// Sum of missing cells across all columns.
    pub total_missing: usize,
    /// Missing cells per column.
    pub missing_per_column: IndexMap<String, usize>,
    /// Missing percentage per column, rounded to 2 decimal places.
    pub missing_percentage: IndexMap<String, f64>,
}

/// Round to two decimal places for display stability.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize missing values for every column.
///
/// The loader rejects zero-row tables, so the percentage division is safe.
pub fn summarize(table: &Table) -> MissingSummary {
    let row_count = table.row_count();
    let mut total_missing = 0;
    let mut missing_per_column = IndexMap::new();
    let mut missing_percentage = IndexMap::new();

    for col in table.columns() {
        let missing = col.missing_count();
        total_missing += missing;
        missing_per_column.insert(col.name.clone(), missing);
        missing_percentage.insert(
            col.name.clone(),
            round2(missing as f64 / row_count as f64 * 100.0),
        );
    }

    MissingSummary {
        total_missing,
        missing_per_column,
        missing_percentage,
    }
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
    fn test_counts_and_percentages() {
        let table = make_table(
            vec!["a", "b"],
            vec![
                vec!["1", "x"],
                vec!["NA", "y"],
                vec!["3", ""],
                vec!["", "w"],
            ],
        );

        let summary = summarize(&table);
        assert_eq!(summary.total_missing, 3);
        assert_eq!(summary.missing_per_column["a"], 2);
        assert_eq!(summary.missing_per_column["b"], 1);
        assert_eq!(summary.missing_percentage["a"], 50.0);
        assert_eq!(summary.missing_percentage["b"], 25.0);
    }

    #[test]
    fn test_total_equals_column_sum() {
        let table = make_table(
            vec!["a", "b", "c"],
            vec![
                vec!["1", "", "-"],
                vec!["", "y", "3"],
                vec!["3", "null", "NA"],
            ],
        );

        let summary = summarize(&table);
        let sum: usize = summary.missing_per_column.values().sum();
        assert_eq!(summary.total_missing, sum);
    }

    #[test]
    fn test_percentage_rounding() {
        // 1 of 3 missing = 33.333...% -> 33.33
        let table = make_table(vec!["a"], vec![vec!["1"], vec![""], vec!["3"]]);

        let summary = summarize(&table);
        assert_eq!(summary.missing_percentage["a"], 33.33);
    }

    #[test]
    fn test_text_column_with_no_missing() {
        let table = make_table(vec!["b"], vec![vec!["x"], vec!["y"]]);

        let summary = summarize(&table);
        assert_eq!(summary.missing_per_column["b"], 0);
        assert_eq!(summary.missing_percentage["b"], 0.0);
    }
}
