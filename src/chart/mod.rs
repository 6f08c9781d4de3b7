//! Peak chart description.
//!
//! `build_peak_chart` is a pure function of a dataset and its summary: the same
//! inputs always produce the same document.

pub mod descriptor;

pub use descriptor::*;

use crate::domain::{NormalizedDataset, PeakSummary};

pub const DAILY_SERIES_NAME: &str = "Daily Sales ($)";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Sales (USD)";
pub const CHART_HEIGHT: u32 = 500;
pub const CHART_TEMPLATE: &str = "plotly_white";

const DAILY_COLOR: &str = "blue";
const PEAK_COLOR: &str = "red";
const PEAK_MARKER_SIZE: u32 = 15;
const PEAK_MARKER_SYMBOL: &str = "star";
const PEAK_TEXT_POSITION: &str = "top center";

/// Build the "daily sales with the peak marked red" chart.
pub fn build_peak_chart(dataset: &NormalizedDataset, peak: &PeakSummary) -> PeakChart {
    let entries = dataset.entries();
    let peak_label = peak.peak_date_label();
    let amount = fmt_amount(peak.peak_sales);

    let daily = Trace {
        kind: TraceKind::Scatter,
        x: entries.iter().map(|e| e.date).collect(),
        y: entries.iter().map(|e| e.sales).collect(),
        mode: TraceMode::LinesMarkers,
        name: DAILY_SERIES_NAME.to_string(),
        line: Some(LineStyle {
            color: DAILY_COLOR.to_string(),
        }),
        marker: None,
        text: None,
        textposition: None,
        showlegend: None,
    };

    let peak_trace = Trace {
        kind: TraceKind::Scatter,
        x: vec![peak.peak_date],
        y: vec![peak.peak_sales],
        mode: TraceMode::MarkersText,
        name: format!("PEAK: ${amount}"),
        line: None,
        marker: Some(MarkerStyle {
            color: PEAK_COLOR.to_string(),
            size: PEAK_MARKER_SIZE,
            symbol: PEAK_MARKER_SYMBOL.to_string(),
        }),
        text: Some(vec![peak_label.clone()]),
        textposition: Some(PEAK_TEXT_POSITION.to_string()),
        showlegend: Some(false),
    };

    PeakChart {
        data: vec![daily, peak_trace],
        layout: Layout {
            title: Title::new(format!("Sales Trend - Peak: ${amount} on {peak_label}")),
            xaxis: Axis {
                title: Title::new(X_AXIS_TITLE),
            },
            yaxis: Axis {
                title: Title::new(Y_AXIS_TITLE),
            },
            height: CHART_HEIGHT,
            template: CHART_TEMPLATE.to_string(),
        },
    }
}

/// Amounts always carry a decimal point (`500.0`, `1250.5`).
///
/// Very large or small magnitudes switch to exponent notation with a signed,
/// two-digit exponent (`1e+16`, `2.5e-05`).
pub fn fmt_amount(value: f64) -> String {
    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
