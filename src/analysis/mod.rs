//! Sales table validation, peak extraction, and the analyzer holder.
//!
//! - cell coercion (`coerce`)
//! - peak/total/average (`summary`)
//! - the validation pass and the stateful holder (`analyzer`)

pub mod analyzer;
pub mod coerce;
pub mod summary;

pub use analyzer::{Analysis, SalesAnalyzer, analyze_table};
pub use summary::summarize;
