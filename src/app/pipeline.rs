//! Shared "load → validate → chart" workflow used by every subcommand.
//!
//! The CLI handlers can then focus on presentation (printing vs exports).

use std::fs;
use std::path::Path;

use crate::analysis::{Analysis, SalesAnalyzer};
use crate::chart::PeakChart;
use crate::error::AppError;

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// File name shown in reports and logs.
    pub file_name: String,
    pub analysis: Analysis,
    pub chart: PeakChart,
}

/// Read a file and run it through a fresh analyzer.
pub fn run_analysis(path: &Path) -> Result<RunOutput, AppError> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::new(2, format!("Failed to read '{}': {e}", path.display())))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    run_analysis_bytes(&bytes, &file_name)
}

/// Run in-memory bytes through a fresh analyzer.
pub fn run_analysis_bytes(bytes: &[u8], file_name: &str) -> Result<RunOutput, AppError> {
    let mut analyzer = SalesAnalyzer::new();
    let analysis = analyzer.try_load(bytes, file_name)?.clone();
    let chart = analyzer.peak_chart()?;

    Ok(RunOutput {
        file_name: file_name.to_string(),
        analysis,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_bytes_run_end_to_end() {
        let csv = b"Date,Sales_USD\n2023-01-01,100\n2023-01-02,300\n2023-01-03,200\n";
        let run = run_analysis_bytes(csv, "q1.csv").unwrap();
        assert_eq!(run.analysis.peak.peak_sales, 300.0);
        assert_eq!(run.chart.data.len(), 2);
        assert_eq!(run.file_name, "q1.csv");
    }

    #[test]
    fn insufficient_rows_exit_with_code_3() {
        let err = run_analysis_bytes(b"Date,Sales_USD\n2023-01-01,100\n", "one.csv").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = run_analysis(Path::new("/nonexistent/sales.xlsx")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
