//! Plot-ready data structures.
//!
//! This stage only shapes numbers for an external renderer; nothing here
//! draws pixels. Histograms use fixed-count equal-width bins with the last
//! bin right-inclusive; a constant column gets a degenerate span of
//! `[min - 0.5, max + 0.5]` (numpy conventions, applied uniformly).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::correlation::Correlations;
use super::descriptive::ColumnStats;
use crate::table::Table;

/// Histogram bins for one numeric column: `edges` has one more entry than
/// `counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Five-number summary reused from the descriptive stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlot {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Correlation matrix as a labeled 2D grid for heatmap rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Labels matching table column order.
    pub columns: Vec<String>,
    /// Symmetric grid; `None` marks undefined pairs.
    pub values: Vec<Vec<Option<f64>>>,
}

/// All visualization payloads for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationData {
    /// Histogram per numeric column with at least one value.
    pub histograms: IndexMap<String, Histogram>,
    /// Box plot per numeric column with complete five-number stats.
    pub boxplots: IndexMap<String, BoxPlot>,
    /// Heatmap grid; `None` when no numeric column has observations.
    pub correlation_heatmap: Option<Heatmap>,
}

/// Bin values into a fixed-count histogram.
fn histogram(values: &[f64], min: f64, max: f64, bins: usize) -> Histogram {
    // Constant columns get an artificial unit span so every bin is
    // well-defined.
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;

    let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

    let mut counts = vec![0usize; bins];
    for &value in values {
        let mut idx = ((value - lo) / width) as usize;
        // Values on the top edge belong to the last bin.
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

/// Build visualization payloads from the table and the outputs of the
/// earlier stages.
pub fn build(
    table: &Table,
    basic_stats: &IndexMap<String, ColumnStats>,
    correlations: &Correlations,
    bins: usize,
) -> VisualizationData {
    let mut histograms = IndexMap::new();
    let mut boxplots = IndexMap::new();

    for col in table.numeric_columns() {
        let Some(stats) = basic_stats.get(&col.name) else {
            continue;
        };

        if let (Some(min), Some(max)) = (stats.min, stats.max) {
            let values: Vec<f64> = col.numeric_values().into_iter().map(|(_, v)| v).collect();
            histograms.insert(col.name.clone(), histogram(&values, min, max, bins));
        }

        if let (Some(min), Some(q1), Some(median), Some(q3), Some(max)) =
            (stats.min, stats.q1, stats.median, stats.q3, stats.max)
        {
            boxplots.insert(
                col.name.clone(),
                BoxPlot {
                    min,
                    q1,
                    median,
                    q3,
                    max,
                },
            );
        }
    }

    let correlation_heatmap = if correlations.matrix.columns.is_empty() {
        None
    } else {
        Some(Heatmap {
            columns: correlations.matrix.columns.clone(),
            values: correlations.matrix.values.clone(),
        })
    };

    VisualizationData {
        histograms,
        boxplots,
        correlation_heatmap,
    }
}
