//! Peak/total/average computation.

use crate::domain::{NormalizedDataset, PeakSummary};

/// Summarize a dataset.
///
/// The peak is the first entry holding the maximum sales value. The average is
/// computed as `total / count` after summing in entry order.
///
/// Returns `None` only if the running total overflows to a non-finite value.
pub fn summarize(dataset: &NormalizedDataset) -> Option<PeakSummary> {
    let entries = dataset.entries();
    let first = entries.first()?;

    let mut peak = first;
    for entry in &entries[1..] {
        // Strictly greater: ties keep the earlier entry.
        if entry.sales > peak.sales {
            peak = entry;
        }
    }

    let total_sales: f64 = entries.iter().map(|e| e.sales).sum();
    if !total_sales.is_finite() {
        return None;
    }
    let day_count = entries.len();

    Some(PeakSummary {
        peak_date: peak.date,
        peak_sales: peak.sales,
        total_sales,
        average_sales: total_sales / day_count as f64,
        day_count,
    })
}
