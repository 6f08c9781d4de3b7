//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - installs logging
//! - reads and validates the sales file
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::cli::{AnalyzeArgs, ChartArgs, Cli, Command, PlotArgs};
use crate::domain::AnalyzeConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `sales` binary.
pub fn run() -> Result<(), AppError> {
    // Env-backed flags (`SALES_PLOT_WIDTH`, ...) may live in a local `.env`.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    crate::logging::init_logging(cli.verbose);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Chart(args) => handle_chart(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analyze_config_from_args(&args)?;
    let run = pipeline::run_analysis(&config.input)?;

    if config.json {
        let json = crate::report::summary_json(&run.file_name, &run.analysis)
            .map_err(|e| AppError::new(4, format!("Failed to serialize summary: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_run_summary(&run.file_name, &run.analysis));
        if config.plot {
            let plot = crate::plot::render_ascii_plot(&run.chart, config.plot_width, config.plot_height);
            println!("{plot}");
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_dataset {
        crate::io::export::write_dataset_csv(path, &run.analysis.dataset)?;
        info!(path = %path.display(), "wrote dataset CSV");
    }
    if let Some(path) = &config.export_chart {
        crate::io::chart_file::write_chart_json(path, &run.chart)?;
        info!(path = %path.display(), "wrote chart JSON");
    }
    if let Some(path) = &config.export_svg {
        let svg = crate::plot::render_svg(&run.chart, config.svg_width)?;
        crate::io::chart_file::write_svg(path, &svg)?;
        info!(path = %path.display(), "wrote chart SVG");
    }

    Ok(())
}

fn handle_chart(args: ChartArgs) -> Result<(), AppError> {
    let run = pipeline::run_analysis(&args.file)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&run.chart)
    } else {
        run.chart.to_json()
    }
    .map_err(|e| AppError::new(4, format!("Failed to serialize chart: {e}")))?;

    println!("{json}");
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let chart = crate::io::chart_file::read_chart_json(&args.chart)?;

    match &args.svg {
        Some(path) => {
            let svg = crate::plot::render_svg(&chart, args.svg_width)?;
            crate::io::chart_file::write_svg(path, &svg)?;
            info!(path = %path.display(), "wrote chart SVG");
        }
        None => println!("{}", crate::plot::render_ascii_plot(&chart, args.width, args.height)),
    }
    Ok(())
}

/// Resolve CLI flags into a run configuration, prompting for the input file if needed.
pub fn analyze_config_from_args(args: &AnalyzeArgs) -> Result<AnalyzeConfig, AppError> {
    let input = match &args.file {
        Some(path) => crate::cli::picker::validate_table_path(path)?,
        None => crate::cli::picker::prompt_for_table_path()?,
    };
    Ok(config_with_input(args, input))
}

fn config_with_input(args: &AnalyzeArgs, input: PathBuf) -> AnalyzeConfig {
    AnalyzeConfig {
        input,
        json: args.json,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        svg_width: args.svg_width,
        export_dataset: args.export.clone(),
        export_chart: args.chart_json.clone(),
        export_svg: args.svg.clone(),
    }
}

/// Rewrite argv so `sales` defaults to `sales analyze`.
///
/// Rules:
/// - `sales`                       -> `sales analyze` (interactive picker)
/// - `sales q1.xlsx --no-plot`     -> `sales analyze q1.xlsx --no-plot`
/// - `sales --help/--version/-h`   -> unchanged (show top-level help/version)
/// - anything naming a subcommand  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let names_subcommand = argv
        .iter()
        .skip(1)
        .any(|a| matches!(a.as_str(), "analyze" | "chart" | "plot" | "help"));
    if names_subcommand {
        return argv;
    }

    let is_top_level_help_or_version = argv
        .get(1)
        .is_some_and(|a| matches!(a.as_str(), "-h" | "--help" | "-V" | "--version"));
    if is_top_level_help_or_version {
        return argv;
    }

    let at = 1.min(argv.len());
    argv.insert(at, "analyze".to_string());
    argv
}
