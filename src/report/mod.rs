//! Reporting utilities: terminal summary and machine-readable summary.

pub mod format;

pub use format::*;

use serde::Serialize;

use crate::analysis::Analysis;
use crate::domain::{IngestStats, PeakSummary};

/// The `--json` form of a run summary.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryJson<'a> {
    pub file: &'a str,
    pub peak: &'a PeakSummary,
    pub ingest: &'a IngestStats,
}

/// Serialize a committed analysis for scripting.
pub fn summary_json(file: &str, analysis: &Analysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SummaryJson {
        file,
        peak: &analysis.peak,
        ingest: &analysis.stats,
    })
}
