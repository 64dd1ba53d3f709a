//! Outlier detection with two independent methods per numeric column.
//!
//! Both detectors operate on non-missing values but report original row
//! positions, so indices always map back to source rows. A value flagged by
//! both methods appears in both result sets; there is no cross-method
//! deduplication.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::descriptive::ColumnStats;
use crate::table::{Column, Table};

/// Z-score detector result for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZScoreAnomalies {
    /// Flagged row positions, ascending. Truncated to the configured cap.
    pub indices: Vec<usize>,
    /// Total number of flagged rows (never truncated).
    pub count: usize,
    /// The |z| cutoff used.
    pub threshold: f64,
}

/// IQR detector result for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IqrAnomalies {
    /// Flagged row positions, ascending. Truncated to the configured cap.
    pub indices: Vec<usize>,
    /// Total number of flagged rows (never truncated).
    pub count: usize,
    /// `q1 - k * IQR`; `None` when quartiles are unavailable.
    pub threshold_lower: Option<f64>,
    /// `q3 + k * IQR`; `None` when quartiles are unavailable.
    pub threshold_upper: Option<f64>,
}

/// Both detector results for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnAnomalies {
    pub z_score_anomalies: ZScoreAnomalies,
    pub iqr_anomalies: IqrAnomalies,
}

/// Z-score detection over one column.
///
/// Undefined (empty result) when the column has fewer than 2 values or zero
/// standard deviation; a constant column never flags anything.
fn detect_z_score(
    column: &Column,
    stats: &ColumnStats,
    threshold: f64,
    max_indices: usize,
) -> ZScoreAnomalies {
    let mut indices = Vec::new();

    if let (Some(mean), Some(std)) = (stats.mean, stats.std) {
        if std > 0.0 {
            for (row, value) in column.numeric_values() {
                if ((value - mean) / std).abs() > threshold {
                    indices.push(row);
                }
            }
        }
    }

    let count = indices.len();
    indices.truncate(max_indices);

    ZScoreAnomalies {
        indices,
        count,
        threshold,
    }
}

/// IQR detection over one column.
///
/// Bounds are `[q1 - k*IQR, q3 + k*IQR]` using the same quartile
/// interpolation as the descriptive stage. When IQR == 0 the detector is
/// skipped (count 0) instead of flagging every off-center point.
fn detect_iqr(
    column: &Column,
    stats: &ColumnStats,
    multiplier: f64,
    max_indices: usize,
) -> IqrAnomalies {
    let (Some(q1), Some(q3)) = (stats.q1, stats.q3) else {
        return IqrAnomalies {
            indices: Vec::new(),
            count: 0,
            threshold_lower: None,
            threshold_upper: None,
        };
    };

    let iqr = q3 - q1;
    let lower = q1 - multiplier * iqr;
    let upper = q3 + multiplier * iqr;

    let mut indices = Vec::new();
    if iqr > 0.0 {
        for (row, value) in column.numeric_values() {
            if value < lower || value > upper {
                indices.push(row);
            }
        }
    }

    let count = indices.len();
    indices.truncate(max_indices);

    IqrAnomalies {
        indices,
        count,
        threshold_lower: Some(lower),
        threshold_upper: Some(upper),
    }
}

/// Run both detectors over every numeric column, in table order.
pub fn detect_all(
    table: &Table,
    z_threshold: f64,
    iqr_multiplier: f64,
    max_indices: usize,
) -> IndexMap<String, ColumnAnomalies> {
    table
        .numeric_columns()
        .map(|col| {
            let values: Vec<f64> = col.numeric_values().into_iter().map(|(_, v)| v).collect();
            let stats = ColumnStats::compute(&values);

            (
                col.name.clone(),
                ColumnAnomalies {
                    z_score_anomalies: detect_z_score(col, &stats, z_threshold, max_indices),
                    iqr_anomalies: detect_iqr(col, &stats, iqr_multiplier, max_indices),
                },
            )
        })
        .collect()
}
