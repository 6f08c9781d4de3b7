//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built in-memory by the ingest/validation pass
//! - exported to JSON/CSV
//! - handed to a rendering front end unchanged

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Canonical label of the first column after relabeling.
pub const DATE_COLUMN: &str = "Date";
/// Canonical label of the second column after relabeling.
pub const SALES_COLUMN: &str = "Sales_USD";

/// Number of columns a sales table must have.
pub const REQUIRED_COLUMNS: usize = 2;
/// Minimum number of surviving rows for a dataset to be analyzable.
pub const MIN_ENTRIES: usize = 2;

/// A single heterogeneous cell as produced by a table reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A cell the reader already typed as a date/time.
    DateTime(NaiveDateTime),
    /// A spreadsheet error value (`#DIV/0!`, `#N/A`, ...).
    Error(String),
}

impl Cell {
    /// Build a cell from a raw text field (CSV). Blank fields are `Empty`.
    pub fn from_text(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }
}

/// A parsed table: header row + data rows.
///
/// Rows may be ragged (CSV is read flexibly); missing trailing cells read as `Empty`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Number of columns: the widest of the header row and any data row.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .fold(self.headers.len(), usize::max)
    }

    /// Replace whatever the header row said with the canonical labels.
    ///
    /// Header text is never checked, only counted.
    pub fn relabel(mut self) -> Self {
        self.headers = vec![DATE_COLUMN.to_string(), SALES_COLUMN.to_string()];
        self
    }

    /// Cell at `(row, col)`, treating missing trailing cells as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

/// One `(date, sales)` pair of a normalized dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesEntry {
    pub date: NaiveDate,
    pub sales: f64,
}

/// The validated dataset: at least [`MIN_ENTRIES`] entries, all finite, in parse order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDataset {
    entries: Vec<SalesEntry>,
}

impl NormalizedDataset {
    /// Returns `None` when there are too few entries or any sales value is non-finite.
    pub fn new(entries: Vec<SalesEntry>) -> Option<Self> {
        if entries.len() < MIN_ENTRIES || entries.iter().any(|e| !e.sales.is_finite()) {
            return None;
        }
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[SalesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Peak/total/average summary derived from a [`NormalizedDataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakSummary {
    /// Date of the (first) maximum sales entry. Serialized as `YYYY-MM-DD`.
    pub peak_date: NaiveDate,
    pub peak_sales: f64,
    pub total_sales: f64,
    pub average_sales: f64,
    pub day_count: usize,
}

impl PeakSummary {
    /// The peak date in ISO form, as shown to users and chart front ends.
    pub fn peak_date_label(&self) -> String {
        self.peak_date.format("%Y-%m-%d").to_string()
    }
}

/// A row dropped during coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowError {
    /// 1-based sheet line (the header is line 1).
    pub line: usize,
    pub message: String,
}

/// What the validation pass saw, kept alongside a committed analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestStats {
    pub rows_read: usize,
    pub rows_used: usize,
    pub row_errors: Vec<RowError>,
}

/// A full `sales analyze` run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus env/defaults).
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: PathBuf,
    /// Print the summary as JSON instead of the text report.
    pub json: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Pixel width used for SVG rendering (height comes from the chart layout).
    pub svg_width: u32,
    pub export_dataset: Option<PathBuf>,
    pub export_chart: Option<PathBuf>,
    pub export_svg: Option<PathBuf>,
}
