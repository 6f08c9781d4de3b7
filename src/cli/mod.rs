//! Command-line parsing for the sales peak analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from validation and charting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sales", version, about = "Sales workbook validator and peak-day analyzer")]
pub struct Cli {
    /// Enable debug logging (per-row drop reasons, parse details).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a workbook/CSV, print the peak summary, and optionally plot/export.
    Analyze(AnalyzeArgs),
    /// Print the peak chart JSON for a workbook/CSV.
    Chart(ChartArgs),
    /// Render a previously exported chart JSON.
    Plot(PlotArgs),
}

/// Options for `sales analyze`.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    /// Workbook (xlsx/xls/xlsb/ods) or CSV with exactly two columns: date, sales.
    ///
    /// When omitted, pick one interactively from the current directory.
    pub file: Option<PathBuf>,

    /// Print the summary as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, env = "SALES_PLOT_WIDTH", default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, env = "SALES_PLOT_HEIGHT", default_value_t = 20)]
    pub height: usize,

    /// Export the normalized dataset to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the peak chart JSON.
    #[arg(long = "chart-json")]
    pub chart_json: Option<PathBuf>,

    /// Render the peak chart to an SVG file.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// SVG width in pixels.
    #[arg(long, env = "SALES_SVG_WIDTH", default_value_t = 1000)]
    pub svg_width: u32,
}

/// Options for `sales chart`.
#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Workbook or CSV to chart.
    pub file: PathBuf,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}

/// Options for plotting a saved chart.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Chart JSON file produced by `sales analyze --chart-json` or `sales chart`.
    #[arg(long, value_name = "JSON")]
    pub chart: PathBuf,

    /// Plot width (columns).
    #[arg(long, env = "SALES_PLOT_WIDTH", default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, env = "SALES_PLOT_HEIGHT", default_value_t = 20)]
    pub height: usize,

    /// Render to an SVG file instead of the terminal.
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// SVG width in pixels.
    #[arg(long, env = "SALES_SVG_WIDTH", default_value_t = 1000)]
    pub svg_width: u32,
}
