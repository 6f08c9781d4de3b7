//! The stateful holder for the current sales analysis.
//!
//! A load either commits a complete new [`Analysis`] or leaves the holder
//! empty. The candidate is built in a local value and only assigned at the
//! end, so a failed attempt can never leave half of a previous result behind.

use tracing::{debug, info, warn};

use crate::analysis::coerce::{coerce_date, coerce_sales};
use crate::analysis::summary::summarize;
use crate::chart::{PeakChart, build_peak_chart};
use crate::domain::{
    IngestStats, NormalizedDataset, PeakSummary, REQUIRED_COLUMNS, RawTable, RowError, SalesEntry,
};
use crate::error::{ChartError, LoadError};
use crate::io::ingest::parse_table;

/// A committed analysis: dataset, its summary, and what ingest saw.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub dataset: NormalizedDataset,
    pub peak: PeakSummary,
    pub stats: IngestStats,
}

impl Analysis {
    pub fn peak_chart(&self) -> PeakChart {
        build_peak_chart(&self.dataset, &self.peak)
    }
}

/// Validate a parsed table and build a candidate analysis.
///
/// Table-level problems (wrong column count, too few surviving rows) reject
/// the table. Row-level problems only drop the row.
pub fn analyze_table(table: RawTable) -> Result<Analysis, LoadError> {
    let found = table.column_count();
    if found != REQUIRED_COLUMNS {
        return Err(LoadError::ColumnCount { found });
    }
    let table = table.relabel();

    let mut entries = Vec::with_capacity(table.rows.len());
    let mut row_errors = Vec::new();

    for idx in 0..table.rows.len() {
        // +2: header is line 1 and lines are 1-based.
        let line = idx + 2;
        let date = coerce_date(table.cell(idx, 0));
        let sales = coerce_sales(table.cell(idx, 1));

        match (date, sales) {
            (Ok(date), Ok(sales)) => entries.push(SalesEntry { date, sales }),
            (date, sales) => {
                let message = [date.err(), sales.err()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");
                debug!(line, %message, "dropping row");
                row_errors.push(RowError { line, message });
            }
        }
    }

    let rows_read = table.rows.len();
    let rows_used = entries.len();
    let dataset =
        NormalizedDataset::new(entries).ok_or(LoadError::InsufficientData { rows: rows_used })?;
    let peak = summarize(&dataset).ok_or_else(|| LoadError::Internal {
        message: "sales total is not finite".to_string(),
    })?;

    Ok(Analysis {
        dataset,
        peak,
        stats: IngestStats {
            rows_read,
            rows_used,
            row_errors,
        },
    })
}

/// Holds at most one committed analysis.
///
/// Valid iff an analysis is present; dataset and summary are always present
/// or absent together.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    current: Option<Analysis>,
}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    pub fn dataset(&self) -> Option<&NormalizedDataset> {
        self.current.as_ref().map(|a| &a.dataset)
    }

    pub fn peak(&self) -> Option<&PeakSummary> {
        self.current.as_ref().map(|a| &a.peak)
    }

    /// Load a sales table from raw bytes; `true` on success.
    ///
    /// `file_name` is informational only. On failure the holder is emptied.
    pub fn load(&mut self, raw: &[u8], file_name: &str) -> bool {
        self.try_load(raw, file_name).is_ok()
    }

    /// Like [`load`](Self::load), but reports why a load was rejected.
    pub fn try_load(&mut self, raw: &[u8], file_name: &str) -> Result<&Analysis, LoadError> {
        let outcome = parse_table(raw).and_then(analyze_table);
        self.commit(outcome, file_name)
    }

    /// Load from an already parsed table.
    pub fn load_table(&mut self, table: RawTable, file_name: &str) -> Result<&Analysis, LoadError> {
        let outcome = analyze_table(table);
        self.commit(outcome, file_name)
    }

    /// Build the peak chart for the current analysis.
    pub fn peak_chart(&self) -> Result<PeakChart, ChartError> {
        self.current
            .as_ref()
            .map(Analysis::peak_chart)
            .ok_or(ChartError::NotReady)
    }

    /// The peak chart as a JSON document.
    pub fn peak_chart_json(&self) -> Result<String, ChartError> {
        Ok(self.peak_chart()?.to_json()?)
    }

    fn commit(
        &mut self,
        outcome: Result<Analysis, LoadError>,
        file_name: &str,
    ) -> Result<&Analysis, LoadError> {
        match outcome {
            Ok(analysis) => {
                info!(
                    file = file_name,
                    rows_read = analysis.stats.rows_read,
                    rows_used = analysis.stats.rows_used,
                    peak_date = %analysis.peak.peak_date,
                    peak_sales = analysis.peak.peak_sales,
                    "loaded sales data"
                );
                Ok(&*self.current.insert(analysis))
            }
            Err(err) => {
                self.current = None;
                warn!(file = file_name, error = %err, "rejected sales data");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn five_days() -> RawTable {
        let rows = (1..=5)
            .map(|d| vec![text(&format!("2023-01-0{d}")), Cell::Number(d as f64 * 100.0)])
            .collect();
        table(&["Date", "Sales_USD"], rows)
    }

    #[test]
    fn starts_empty() {
        let analyzer = SalesAnalyzer::new();
        assert!(!analyzer.is_valid());
        assert!(analyzer.dataset().is_none());
        assert!(analyzer.peak().is_none());
    }

    #[test]
    fn valid_table_commits() {
        let mut analyzer = SalesAnalyzer::new();
        let analysis = analyzer.load_table(five_days(), "t.xlsx").unwrap();
        assert_eq!(analysis.peak.day_count, 5);
        assert_eq!(analysis.peak.peak_sales, 500.0);
        assert_eq!(analysis.peak.total_sales, 1500.0);
        assert_eq!(analysis.peak.average_sales, 300.0);
        assert!(analyzer.is_valid());
    }

    #[test]
    fn headers_are_not_checked() {
        let mut t = five_days();
        t.headers = vec!["anything".into(), "".into()];
        assert!(analyze_table(t).is_ok());
    }

    #[test]
    fn wrong_column_counts_are_rejected() {
        let one = table(&["Date"], vec![vec![text("2023-01-01")], vec![text("2023-01-02")]]);
        assert_eq!(analyze_table(one).unwrap_err(), LoadError::ColumnCount { found: 1 });

        let three = table(
            &["Date", "Sales_USD", "Extra"],
            vec![
                vec![text("2023-01-01"), Cell::Number(1.0), Cell::Number(1.0)],
                vec![text("2023-01-02"), Cell::Number(2.0), Cell::Number(2.0)],
            ],
        );
        assert_eq!(analyze_table(three).unwrap_err(), LoadError::ColumnCount { found: 3 });
    }

    #[test]
    fn bad_rows_are_dropped_not_fatal() {
        let t = table(
            &["Date", "Sales_USD"],
            vec![
                vec![text("2023-01-01"), Cell::Number(10.0)],
                vec![text("not a date"), Cell::Number(99.0)],
                vec![text("2023-01-03"), text("n/a")],
                vec![text("2023-01-04"), Cell::Number(40.0)],
                vec![Cell::Empty, Cell::Empty],
            ],
        );
        let analysis = analyze_table(t).unwrap();
        assert_eq!(analysis.stats.rows_read, 5);
        assert_eq!(analysis.stats.rows_used, 2);
        let lines: Vec<usize> = analysis.stats.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 6]);
        assert_eq!(analysis.peak.peak_sales, 40.0);
        assert_eq!(analysis.dataset.len(), analysis.peak.day_count);
    }

    #[test]
    fn entries_keep_parse_order() {
        let t = table(
            &["Date", "Sales_USD"],
            vec![
                vec![text("2023-01-03"), Cell::Number(3.0)],
                vec![text("2023-01-01"), Cell::Number(1.0)],
            ],
        );
        let analysis = analyze_table(t).unwrap();
        let days: Vec<u32> = analysis
            .dataset
            .entries()
            .iter()
            .map(|e| chrono::Datelike::day(&e.date))
            .collect();
        assert_eq!(days, vec![3, 1]);
    }

    #[test]
    fn non_numeric_sales_leave_too_few_rows() {
        let t = table(
            &["Date", "Sales_USD"],
            vec![
                vec![text("2023-01-01"), text("a")],
                vec![text("2023-01-02"), text("b")],
                vec![text("2023-01-03"), text("c")],
            ],
        );
        assert_eq!(analyze_table(t).unwrap_err(), LoadError::InsufficientData { rows: 0 });
    }

    #[test]
    fn single_row_is_insufficient() {
        let t = table(&["Date", "Sales_USD"], vec![vec![text("2023-01-01"), Cell::Number(100.0)]]);
        assert_eq!(analyze_table(t).unwrap_err(), LoadError::InsufficientData { rows: 1 });
    }

    #[test]
    fn failed_load_clears_previous_state() {
        let mut analyzer = SalesAnalyzer::new();
        analyzer.load_table(five_days(), "good.xlsx").unwrap();
        assert!(analyzer.is_valid());

        let bad = table(&["Date"], vec![]);
        assert!(analyzer.load_table(bad, "bad.xlsx").is_err());
        assert!(!analyzer.is_valid());
        assert!(analyzer.dataset().is_none());
        assert!(analyzer.peak().is_none());
    }

    #[test]
    fn successful_reload_replaces_wholesale() {
        let mut analyzer = SalesAnalyzer::new();
        analyzer.load_table(five_days(), "first.xlsx").unwrap();

        let second = table(
            &["Date", "Sales_USD"],
            vec![
                vec![text("2024-06-01"), Cell::Number(7.0)],
                vec![text("2024-06-02"), Cell::Number(3.0)],
            ],
        );
        analyzer.load_table(second, "second.xlsx").unwrap();
        assert_eq!(analyzer.dataset().map(NormalizedDataset::len), Some(2));
        assert_eq!(analyzer.peak().map(|p| p.peak_date_label()), Some("2024-06-01".to_string()));
    }

    #[test]
    fn overflowing_total_is_internal_error() {
        let t = table(
            &["Date", "Sales_USD"],
            vec![
                vec![text("2023-01-01"), Cell::Number(f64::MAX)],
                vec![text("2023-01-02"), Cell::Number(f64::MAX)],
            ],
        );
        assert!(matches!(analyze_table(t), Err(LoadError::Internal { .. })));
    }

    #[test]
    fn chart_requires_a_loaded_dataset() {
        let mut analyzer = SalesAnalyzer::new();
        assert!(matches!(analyzer.peak_chart(), Err(ChartError::NotReady)));

        analyzer.load_table(five_days(), "t.xlsx").unwrap();
        let chart = analyzer.peak_chart().unwrap();
        assert_eq!(chart.data.len(), 2);
        assert!(analyzer.peak_chart_json().unwrap().contains("Daily Sales ($)"));
    }
}
