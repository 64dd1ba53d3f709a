//! Typed in-memory table with per-column numeric/text classification.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A single cell value after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Designated missing marker, distinct from zero and from empty text.
    Missing,
    /// Finite floating-point value. Only appears in numeric columns.
    Number(f64),
    /// Raw text. Only appears in text columns.
    Text(String),
}

impl Cell {
    /// Returns true if this cell is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Classification of a column, fixed once at load time and never re-inferred
/// by later stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing cell parses as a finite float.
    Numeric,
    /// At least one non-missing cell is not numeric.
    Text,
}

impl ColumnKind {
    /// Returns true if this column participates in numeric stages.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within the table.
    pub name: String,
    /// Numeric/text classification.
    pub kind: ColumnKind,
    /// Cell values, one per row.
    pub cells: Vec<Cell>,
}

impl Column {
    /// Count of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Non-missing numeric values paired with their original row index.
    ///
    /// Empty for text columns. Row indices refer to positions in the source
    /// table, not a compacted sequence, so downstream anomaly indices map
    /// back to source rows.
    pub fn numeric_values(&self) -> Vec<(usize, f64)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(row, cell)| match cell {
                Cell::Number(v) => Some((row, *v)),
                _ => None,
            })
            .collect()
    }
}

/// Immutable snapshot of a parsed tabular dataset.
///
/// Invariant: every column holds exactly `row_count` cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from a header and raw string rows.
    ///
    /// Each column is classified as numeric iff every non-missing cell parses
    /// as a finite float; a single unparsable non-missing cell demotes the
    /// whole column to text (no partial coercion). Missing markers do not
    /// count against the classification.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, LoadError> {
        if header.is_empty() {
            return Err(LoadError::NoColumns);
        }
        if rows.is_empty() {
            return Err(LoadError::NoRows);
        }
        for (i, name) in header.iter().enumerate() {
            if header[..i].iter().any(|other| other == name) {
                return Err(LoadError::DuplicateColumn(name.clone()));
            }
        }
        let expected = header.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LoadError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }

        let row_count = rows.len();
        let columns = header
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Self::build_column(name, idx, &rows))
            .collect();

        Ok(Self { columns, row_count })
    }

    /// Classify and materialize a single column.
    fn build_column(name: String, index: usize, rows: &[Vec<String>]) -> Column {
        let raw = rows.iter().map(|row| row[index].as_str());

        let numeric = raw.clone().all(|value| {
            Self::is_missing_token(value)
                || value
                    .trim()
                    .parse::<f64>()
                    .map(|v| v.is_finite())
                    .unwrap_or(false)
        });

        let cells = raw
            .map(|value| {
                if Self::is_missing_token(value) {
                    Cell::Missing
                } else if numeric {
                    // Safe: classification above checked every non-missing cell.
                    Cell::Number(value.trim().parse::<f64>().unwrap_or(f64::NAN))
                } else {
                    Cell::Text(value.to_string())
                }
            })
            .collect();

        let kind = if numeric {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        };

        Column { name, kind, cells }
    }

    /// Check if a raw value is a missing/null marker.
    pub fn is_missing_token(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Numeric columns in table order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.kind.is_numeric())
    }
}
