//! Formatted terminal output.
//!
//! We keep formatting code in one place so output changes are localized.

use crate::analysis::Analysis;
use crate::chart::fmt_amount;
use crate::domain::RowError;

/// At most this many dropped rows are listed individually.
const MAX_LISTED_ROW_ERRORS: usize = 10;

/// Format the run summary (ingest counts + peak/total/average).
pub fn format_run_summary(file: &str, analysis: &Analysis) -> String {
    let peak = &analysis.peak;
    let stats = &analysis.stats;
    let mut out = String::new();

    out.push_str("=== sales - Peak Sales Summary ===\n");
    out.push_str(&format!("File: {file}\n"));
    out.push_str(&format!(
        "Rows: read={} | used={} | dropped={}\n",
        stats.rows_read,
        stats.rows_used,
        stats.row_errors.len()
    ));
    out.push('\n');
    out.push_str(&format!("Peak day     : {}\n", peak.peak_date_label()));
    out.push_str(&format!("Peak sales   : ${}\n", fmt_amount(peak.peak_sales)));
    out.push_str(&format!("Total sales  : ${:.2}\n", peak.total_sales));
    out.push_str(&format!("Average/day  : ${:.2}\n", peak.average_sales));
    out.push_str(&format!("Days         : {}\n", peak.day_count));

    if !stats.row_errors.is_empty() {
        out.push('\n');
        out.push_str(&format_row_errors(&stats.row_errors));
    }

    out
}

/// List dropped rows (truncated).
pub fn format_row_errors(errors: &[RowError]) -> String {
    let mut out = String::new();
    out.push_str("Dropped rows:\n");
    for err in errors.iter().take(MAX_LISTED_ROW_ERRORS) {
        out.push_str(&format!("  line {:>5}: {}\n", err.line, err.message));
    }
    if errors.len() > MAX_LISTED_ROW_ERRORS {
        out.push_str(&format!("  ... and {} more\n", errors.len() - MAX_LISTED_ROW_ERRORS));
    }
    out
}
