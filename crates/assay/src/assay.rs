//! Main Assay struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisConfig};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::report::Report;
use crate::table::Table;

/// Configuration for a full file-to-report run.
#[derive(Debug, Clone, Default)]
pub struct AssayConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Engine thresholds.
    pub analysis: AnalysisConfig,
}

/// Result of profiling a data file: where it came from plus what the engine
/// found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The statistical report.
    pub report: Report,
}

/// The file-level profiling entry point.
///
/// Wraps the ingestion parser and the analysis engine behind one call; the
/// engine itself stays a pure function over the parsed table and is also
/// usable directly via [`analysis::analyze`].
pub struct Assay {
    config: AssayConfig,
    parser: Parser,
}

impl Assay {
    /// Create an Assay instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(AssayConfig::default())
    }

    /// Create an Assay instance with custom configuration.
    pub fn with_config(config: AssayConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Profile a data file end to end.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let (table, source) = self.parser.parse_file(path)?;
        let report = analysis::analyze(&table, &self.config.analysis)?;
        Ok(AnalysisResult { source, report })
    }

    /// Profile an already-loaded table.
    pub fn analyze_table(&self, table: &Table) -> Result<Report> {
        Ok(analysis::analyze(table, &self.config.analysis)?)
    }
}

impl Default for Assay {
    fn default() -> Self {
        Self::new()
    }
}
