//! Per-column descriptive statistics.
//!
//! Every statistic is `Option<f64>`: `None` means "cannot be computed" for
//! this column (too few samples, zero variance) and must never be collapsed
//! to zero, or downstream correlation/anomaly stages would silently consume
//! corrupt values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::Table;

/// Descriptive statistics for a numeric column, computed over non-missing
/// values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean. `None` if count == 0.
    pub mean: Option<f64>,
    /// Sample standard deviation (divisor n-1). `None` if count < 2.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Median by linear interpolation on sorted values.
    pub median: Option<f64>,
    /// 25th percentile, same interpolation as the median.
    pub q1: Option<f64>,
    /// 75th percentile, same interpolation as the median.
    pub q3: Option<f64>,
    /// Adjusted Fisher-Pearson skewness. `None` if count < 3 or std == 0.
    pub skew: Option<f64>,
    /// Adjusted excess kurtosis. `None` if count < 4 or std == 0.
    pub kurtosis: Option<f64>,
}

impl ColumnStats {
    /// Statistics of an empty column: everything unknown.
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: None,
            std: None,
            min: None,
            max: None,
            median: None,
            q1: None,
            q3: None,
            skew: None,
            kurtosis: None,
        }
    }

    /// Compute statistics over a column's non-missing values.
    pub fn compute(values: &[f64]) -> Self {
        let n = values.len();
        if n == 0 {
            return Self::empty();
        }

        // Welford's online algorithm for a numerically stable mean and
        // second moment.
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (i, &value) in values.iter().enumerate() {
            let delta = value - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (value - mean);
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }

        let std = if n >= 2 {
            Some((m2 / (n - 1) as f64).sqrt())
        } else {
            None
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = Some(quantile(&sorted, 0.5));
        let q1 = Some(quantile(&sorted, 0.25));
        let q3 = Some(quantile(&sorted, 0.75));

        // Higher central moments in a second pass against the final mean.
        let mut sum3 = 0.0;
        let mut sum4 = 0.0;
        for &value in values {
            let d = value - mean;
            sum3 += d * d * d;
            sum4 += d * d * d * d;
        }

        let skew = if n >= 3 && m2 > 0.0 {
            let nf = n as f64;
            let g1 = (sum3 / nf) / (m2 / nf).powf(1.5);
            Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
        } else {
            None
        };

        let kurtosis = if n >= 4 && m2 > 0.0 {
            let nf = n as f64;
            let g2 = (sum4 / nf) / (m2 / nf).powi(2) - 3.0;
            Some(((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)))
        } else {
            None
        };

        Self {
            count: n,
            mean: Some(mean),
            std,
            min: Some(min),
            max: Some(max),
            median,
            q1,
            q3,
            skew,
            kurtosis,
        }
    }

    /// Interquartile range. `None` if the quartiles are unavailable.
    pub fn iqr(&self) -> Option<f64> {
        Some(self.q3? - self.q1?)
    }
}

/// Percentile by linear interpolation at `(n-1) * p` on sorted values.
///
/// This is the pandas/numpy `linear` method; the anomaly stage relies on it
/// producing exactly the quartiles reported here.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    debug_assert!(n > 0);
    let pos = (n - 1) as f64 * p;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = pos - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Compute descriptive statistics for every numeric column, in table order.
///
/// Numeric columns with zero non-missing values are still present, carrying
/// all-`None` statistics.
pub fn analyze(table: &Table) -> IndexMap<String, ColumnStats> {
    table
        .numeric_columns()
        .map(|col| {
            let values: Vec<f64> = col.numeric_values().into_iter().map(|(_, v)| v).collect();
            (col.name.clone(), ColumnStats::compute(&values))
        })
        .collect()
}
