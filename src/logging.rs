//! Process-wide `tracing` setup for the `sales` binary.
//!
//! Library code only emits events (`debug!` per dropped row, `info!` when a
//! dataset is committed, `warn!` when a load is rejected). Installing a
//! subscriber is the binary's job and happens once, right after argument parsing.
//!
//! Logs always go to stderr: stdout carries the report, the plot, or JSON.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Crate-specific filter variable; wins over `RUST_LOG`.
pub const LOG_ENV: &str = "SALES_LOG";

/// Install the global subscriber. A second call keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let directive = filter_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {err}");
    }
}

/// Pick the filter directive: `SALES_LOG`, then `RUST_LOG`, then the verbosity default.
///
/// Blank variables count as unset.
fn filter_directive(sales_log: Option<String>, rust_log: Option<String>, verbose: bool) -> String {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    non_blank(sales_log)
        .or_else(|| non_blank(rust_log))
        .unwrap_or_else(|| {
            let level = if verbose { "debug" } else { "info" };
            level.to_string()
        })
}
