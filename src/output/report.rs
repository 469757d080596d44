//! Tabular evolution report.
//!
//! One row per analyzed graph, tab-separated, with a header line:
//!
//! ```text
//! version_number  #vertices  #arcs  avg_degree  std_dev  #components  largest_component_size
//! "1.0"           1204       3311   2.750000    4.120531 1187
//! ```
//!
//! Rows are collected in memory and written once by a single writer.

use super::paths::{file_size, prepare_output_path};
use crate::analysis::{calculate_metrics, GraphMetrics, SccResult};
use crate::graph::Digraph;
use crate::utils::config::{REPORT_COLUMNS, REPORT_SEPARATOR};
use crate::utils::error::OutputError;
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Version tag of the analyzed release
    pub version: String,

    #[serde(flatten)]
    pub metrics: GraphMetrics,
}

impl ReportRow {
    /// Build a row from a graph and its SCC partition
    pub fn from_analysis(version: impl Into<String>, digraph: &Digraph, scc: &SccResult) -> Self {
        Self {
            version: version.into(),
            metrics: calculate_metrics(digraph, scc),
        }
    }

    /// Render as a tab-separated line (no trailing newline)
    ///
    /// The largest-component field is left empty when `include_largest` is false.
    pub fn to_line(&self, include_largest: bool) -> String {
        let m = &self.metrics;
        let largest = if include_largest {
            m.largest_component_size.to_string()
        } else {
            String::new()
        };

        [
            format!("\"{}\"", self.version),
            m.vertices.to_string(),
            m.arcs.to_string(),
            format!("{:.6}", m.avg_degree),
            format!("{:.6}", m.std_dev),
            m.components.to_string(),
            largest,
        ]
        .join(REPORT_SEPARATOR)
    }
}

/// JSON rendering of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Timestamp when report was generated
    pub generated_at: String,

    pub rows: Vec<ReportRow>,
}

/// Collected rows of one analysis run
#[derive(Debug, Clone, Default)]
pub struct StatsReport {
    rows: Vec<ReportRow>,
    include_largest: bool,
}

impl StatsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the largest component size column values
    pub fn with_largest_component(mut self, enabled: bool) -> Self {
        self.include_largest = enabled;
        self
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Analyze-and-append convenience for `(version, graph, scc)` tuples
    pub fn add(&mut self, version: impl Into<String>, digraph: &Digraph, scc: &SccResult) {
        self.push(ReportRow::from_analysis(version, digraph, scc));
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header line plus one line per row, newline-terminated
    pub fn to_tsv(&self) -> String {
        let mut out = REPORT_COLUMNS.join(REPORT_SEPARATOR);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.to_line(self.include_largest));
            out.push('\n');
        }
        out
    }

    /// Write the tab-separated report
    ///
    /// **Public** - main entry point for report output
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - Path is empty, a directory, or cannot be created
    /// * `OutputError::WriteFailed` - I/O error during write
    pub fn write_tsv(&self, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
        let output_path = output_path.as_ref();
        prepare_output_path(output_path)?;

        let mut writer = BufWriter::new(File::create(output_path)?);
        writer.write_all(self.to_tsv().as_bytes())?;
        writer.flush()?;

        info!(
            "Report written to: {} ({} rows, {} bytes)",
            output_path.display(),
            self.rows.len(),
            file_size(output_path)
        );
        Ok(())
    }

    /// Write the rows as pretty JSON with a generation timestamp
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - Path is empty, a directory, or cannot be created
    /// * `OutputError::WriteFailed` - I/O error during write
    /// * `OutputError::SerializationFailed` - JSON serialization error
    pub fn write_json(&self, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
        let output_path = output_path.as_ref();
        prepare_output_path(output_path)?;

        let document = ReportDocument {
            generated_at: Utc::now().to_rfc3339(),
            rows: self.rows.clone(),
        };

        let writer = BufWriter::new(File::create(output_path)?);
        serde_json::to_writer_pretty(writer, &document)?;

        info!("JSON report written to: {}", output_path.display());
        Ok(())
    }
}
