//! Export the normalized dataset to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::NormalizedDataset;
use crate::error::AppError;

/// Write `date,sales_usd` rows in dataset order.
pub fn write_dataset_csv(path: &Path, dataset: &NormalizedDataset) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "date,sales_usd")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for entry in dataset.entries() {
        writeln!(file, "{},{}", entry.date.format("%Y-%m-%d"), entry.sales)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
