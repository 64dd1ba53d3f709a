//! Pairwise Pearson correlation over numeric columns.
//!
//! Each pair uses pairwise-complete observations: only rows where both
//! columns are non-missing. A pair with fewer than 2 overlapping rows, or
//! where either side has zero variance over the overlap, is omitted rather
//! than reported as zero.

use serde::{Deserialize, Serialize};

use crate::table::{Cell, Column, Table};

/// A strongly correlated column pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub column1: String,
    pub column2: String,
    /// Pearson coefficient in [-1, 1].
    pub correlation: f64,
}

/// Full correlation matrix with row/column labels in table order.
///
/// `values[i][j]` is the coefficient between `columns[i]` and `columns[j]`,
/// rounded to 3 decimal places; `None` marks undefined pairs. Numeric columns
/// with zero non-missing values are excluded entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

/// Correlation stage output: the full matrix for heatmap rendering plus the
/// filtered strong-pair list for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlations {
    pub matrix: CorrelationMatrix,
    /// Pairs with |r| strictly above the configured threshold, sorted by
    /// descending |r|.
    pub strong_correlations: Vec<CorrelationPair>,
}

/// Round to three decimal places, matching the matrix display contract.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Dense per-row view of a numeric column.
fn dense_values(column: &Column) -> Vec<Option<f64>> {
    column
        .cells
        .iter()
        .map(|cell| match cell {
            Cell::Number(v) => Some(*v),
            _ => None,
        })
        .collect()
}

/// Pearson coefficient over the rows where both sides are present.
///
/// Returns `None` when fewer than 2 rows overlap or either side's variance
/// over the overlap is zero.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x == 0.0 || sum_sq_y == 0.0 {
        return None;
    }

    Some((numerator / (sum_sq_x * sum_sq_y).sqrt()).clamp(-1.0, 1.0))
}

/// Compute the correlation stage for a table.
///
/// `threshold` is the strong-correlation cutoff: pairs qualify when
/// `|r| > threshold` strictly. Self-pairs never qualify.
pub fn analyze(table: &Table, threshold: f64) -> Correlations {
    // Numeric columns with at least one observation participate.
    let participants: Vec<&Column> = table
        .numeric_columns()
        .filter(|col| col.cells.iter().any(|c| !c.is_missing()))
        .collect();

    let dense: Vec<Vec<Option<f64>>> = participants.iter().map(|c| dense_values(c)).collect();
    let labels: Vec<String> = participants.iter().map(|c| c.name.clone()).collect();
    let k = participants.len();

    let mut values = vec![vec![None; k]; k];
    let mut strong = Vec::new();

    for i in 0..k {
        // Diagonal: defined as 1.0 exactly when the column would correlate
        // with itself under the pair rule (>= 2 observations, nonzero
        // variance).
        values[i][i] = pearson(&dense[i], &dense[i]).map(|_| 1.0);

        for j in (i + 1)..k {
            let r = pearson(&dense[i], &dense[j]);
            values[i][j] = r.map(round3);
            values[j][i] = values[i][j];

            if let Some(r) = r {
                if r.abs() > threshold {
                    strong.push(CorrelationPair {
                        column1: labels[i].clone(),
                        column2: labels[j].clone(),
                        correlation: r,
                    });
                }
            }
        }
    }

    // Stable sort keeps column order for equal |r|, so output is
    // deterministic.
    strong.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Correlations {
        matrix: CorrelationMatrix {
            columns: labels,
            values,
        },
        strong_correlations: strong,
    }
}
