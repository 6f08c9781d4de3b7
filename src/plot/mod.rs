//! Chart renderers.
//!
//! Both renderers consume a `PeakChart` rather than the analyzer, so a saved
//! chart JSON can be re-rendered without the original workbook.
//!
//! - terminal plot (`ascii`)
//! - SVG via Plotters (`svg`)

pub mod ascii;
pub mod svg;

pub use ascii::render_ascii_plot;
pub use svg::render_svg;

use chrono::NaiveDate;

use crate::chart::PeakChart;

/// Chart series projected onto a numeric x-axis (days since the earliest date).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlotData {
    pub origin: NaiveDate,
    pub last: NaiveDate,
    pub points: Vec<(f64, f64)>,
    pub peak: Option<PeakPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PeakPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl PlotData {
    /// Returns `None` when the chart has no daily series or it is empty.
    pub fn from_chart(chart: &PeakChart) -> Option<Self> {
        let daily = chart.daily_series()?;
        let origin = daily.x.iter().min().copied()?;
        let last = daily.x.iter().max().copied()?;

        let offset = |d: NaiveDate| (d - origin).num_days() as f64;
        let points = daily.points().map(|(d, y)| (offset(d), y)).collect();

        let peak = chart.peak_marker().and_then(|trace| {
            let (date, y) = trace.points().next()?;
            let label = trace
                .text
                .as_ref()
                .and_then(|t| t.first().cloned())
                .unwrap_or_else(|| date.format("%Y-%m-%d").to_string());
            Some(PeakPoint {
                x: offset(date),
                y,
                label,
            })
        });

        Some(Self {
            origin,
            last,
            points,
            peak,
        })
    }

    /// x-range, widened when all points fall on one day.
    pub fn x_range(&self) -> (f64, f64) {
        let span = (self.last - self.origin).num_days() as f64;
        if span > 0.0 { (0.0, span) } else { (-1.0, 1.0) }
    }

    /// y-range over all points (peak included), padded by `frac` of the span.
    pub fn y_range(&self, frac: f64) -> (f64, f64) {
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let peak = self.peak.as_ref().map(|p| p.y);
        for y in self.points.iter().map(|&(_, y)| y).chain(peak) {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        if !(min_y.is_finite() && max_y.is_finite()) {
            return (0.0, 1.0);
        }
        let span = (max_y - min_y).abs();
        let pad = if span > 0.0 { span * frac } else { min_y.abs().max(1.0) * frac.max(0.05) };
        (min_y - pad, max_y + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analysis::summarize;
    use crate::chart::build_peak_chart;
    use crate::domain::{NormalizedDataset, SalesEntry};

    fn chart() -> PeakChart {
        let entries = [(3, 40.0), (1, 90.0), (6, 10.0)]
            .iter()
            .map(|&(day, sales)| SalesEntry {
                date: NaiveDate::from_ymd_opt(2023, 4, day).unwrap(),
                sales,
            })
            .collect();
        let dataset = NormalizedDataset::new(entries).unwrap();
        let peak = summarize(&dataset).unwrap();
        build_peak_chart(&dataset, &peak)
    }

    #[test]
    fn points_are_day_offsets_from_earliest_date() {
        let data = PlotData::from_chart(&chart()).unwrap();
        assert_eq!(data.points, vec![(2.0, 40.0), (0.0, 90.0), (5.0, 10.0)]);
        assert_eq!(data.x_range(), (0.0, 5.0));
    }

    #[test]
    fn peak_label_falls_back_to_the_date() {
        let mut c = chart();
        let data = PlotData::from_chart(&c).unwrap();
        let peak = data.peak.unwrap();
        assert_eq!((peak.x, peak.y, peak.label.as_str()), (0.0, 90.0, "2023-04-01"));

        c.data[1].text = Some(vec!["Apr 1".to_string()]);
        assert_eq!(PlotData::from_chart(&c).unwrap().peak.unwrap().label, "Apr 1");

        c.data[1].text = None;
        assert_eq!(PlotData::from_chart(&c).unwrap().peak.unwrap().label, "2023-04-01");
    }
}
