//! Declarative chart document.
//!
//! The shape follows the figure JSON understood by Plotly-style front ends
//! (`{ "data": [traces...], "layout": {...} }`) so a browser can render it
//! without any translation step. Nothing here draws; see `plot` for renderers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakChart {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl PeakChart {
    /// The daily sales line, if present.
    pub fn daily_series(&self) -> Option<&Trace> {
        self.data.iter().find(|t| t.mode == TraceMode::LinesMarkers)
    }

    /// The single-point peak overlay, if present.
    pub fn peak_marker(&self) -> Option<&Trace> {
        self.data.iter().find(|t| t.mode == TraceMode::MarkersText)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceKind {
    #[serde(rename = "scatter")]
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines+markers")]
    LinesMarkers,
    #[serde(rename = "markers+text")]
    MarkersText,
}

/// One series of `(date, value)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub mode: TraceMode,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    /// Iterate the trace as `(date, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: u32,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    /// Display height in pixels.
    pub height: u32,
    /// Named visual theme.
    pub template: String,
}
