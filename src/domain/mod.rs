//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw parsed tables (`RawTable`, `Cell`)
//! - the normalized dataset (`SalesEntry`, `NormalizedDataset`)
//! - derived outputs (`PeakSummary`, `IngestStats`)

pub mod types;

pub use types::*;
