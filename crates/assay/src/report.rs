//! The assembled analysis report and its serialization boundary.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    ColumnAnomalies, ColumnStats, Correlations, MissingSummary, VisualizationData,
};
use crate::error::Result;
use crate::table::{ColumnKind, Table};

/// Run-level metadata carried alongside the stage outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Number of data rows analyzed.
    pub rows: usize,
    /// All column names in table order.
    pub columns: Vec<String>,
    /// Numeric/text classification per column.
    pub column_kinds: IndexMap<String, ColumnKind>,
    /// When the report was assembled.
    pub analyzed_at: DateTime<Utc>,
}

impl ReportMetadata {
    /// Capture metadata from the analyzed table snapshot.
    pub fn from_table(table: &Table) -> Self {
        Self {
            rows: table.row_count(),
            columns: table.column_names().iter().map(|s| s.to_string()).collect(),
            column_kinds: table
                .columns()
                .iter()
                .map(|c| (c.name.clone(), c.kind))
                .collect(),
            analyzed_at: Utc::now(),
        }
    }
}

/// The complete, immutable output of one analysis run.
///
/// Constructed once per run from a single table snapshot, never mutated
/// afterwards; ownership transfers wholesale to the caller for persistence.
/// The serde field layout is the boundary contract consumed by presentation
/// layers and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Per-numeric-column descriptive statistics.
    pub basic_stats: IndexMap<String, ColumnStats>,
    /// Missing-data summary over all columns.
    pub missing_values: MissingSummary,
    /// Correlation matrix plus the strong-pair list.
    pub correlations: Correlations,
    /// Per-numeric-column anomaly detector results.
    pub anomalies: IndexMap<String, ColumnAnomalies>,
    /// Plot-ready payloads.
    pub visualizations: VisualizationData,
    /// Run metadata.
    pub metadata: ReportMetadata,
}

impl Report {
    /// Serialize the report to the boundary JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reconstruct a report from its boundary JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
