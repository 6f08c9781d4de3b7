//! Read/write chart JSON files.
//!
//! Chart JSON is the portable form of a peak chart: the same document the
//! `chart` command prints, which a browser front end can render directly and
//! `sales plot` can re-render in the terminal or as SVG.
//!
//! The schema is defined by `chart::PeakChart`.

use std::fs::File;
use std::path::Path;

use crate::chart::PeakChart;
use crate::error::AppError;

/// Write a chart JSON file.
pub fn write_chart_json(path: &Path, chart: &PeakChart) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create chart JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, chart)
        .map_err(|e| AppError::new(2, format!("Failed to write chart JSON: {e}")))?;

    Ok(())
}

/// Read a chart JSON file.
pub fn read_chart_json(path: &Path) -> Result<PeakChart, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open chart JSON '{}': {e}", path.display())))?;
    let chart: PeakChart =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid chart JSON: {e}")))?;
    Ok(chart)
}

/// Write a rendered SVG document.
pub fn write_svg(path: &Path, svg: &str) -> Result<(), AppError> {
    std::fs::write(path, svg)
        .map_err(|e| AppError::new(2, format!("Failed to write SVG '{}': {e}", path.display())))
}
