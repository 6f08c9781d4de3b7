//! Plotters-powered SVG rendering of a peak chart.
//!
//! The renderer is data-driven: series, bounds and labels all come from the
//! chart document, so rendering a saved chart JSON gives the same picture as
//! rendering a fresh analysis.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use crate::chart::{PeakChart, fmt_amount};
use crate::error::AppError;
use crate::plot::{PeakPoint, PlotData};

type SvgError = DrawingAreaErrorKind<std::io::Error>;

/// Render a chart to an SVG document. Height comes from the chart layout.
pub fn render_svg(chart: &PeakChart, width: u32) -> Result<String, AppError> {
    let data = PlotData::from_chart(chart)
        .ok_or_else(|| AppError::new(4, "Chart has no daily sales series to render."))?;
    let size = (width.max(200), chart.layout.height.max(200));

    let mut svg = String::new();
    draw(&mut svg, chart, &data, size)
        .map_err(|e| AppError::new(4, format!("Failed to render chart SVG: {e}")))?;
    Ok(svg)
}

fn draw(buf: &mut String, chart: &PeakChart, data: &PlotData, size: (u32, u32)) -> Result<(), SvgError> {
    let root = SVGBackend::with_string(buf, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x0, x1) = data.x_range();
    let (y0, y1) = data.y_range(0.1);

    let mut ctx = ChartBuilder::on(&root)
        .caption(chart.layout.title.text.as_str(), ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    let origin = data.origin;
    let fmt_x = |v: &f64| day_label(origin, *v);
    ctx.configure_mesh()
        .x_desc(chart.layout.xaxis.title.text.as_str())
        .y_desc(chart.layout.yaxis.title.text.as_str())
        .x_labels(6)
        .y_labels(8)
        .x_label_formatter(&fmt_x)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let name = chart.daily_series().map(|t| t.name.clone()).unwrap_or_default();
    ctx.draw_series(LineSeries::new(data.points.iter().copied(), &BLUE))?
        .label(name)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    ctx.draw_series(
        data.points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    if let Some(PeakPoint { x, y, label }) = &data.peak {
        let caption = format!("{label} (${})", fmt_amount(*y));
        ctx.draw_series(std::iter::once(
            EmptyElement::at((*x, *y))
                + Polygon::new(star_vertices(9, 4), RED.filled())
                + Text::new(caption, (-40, -26), ("sans-serif", 14).into_font().color(&RED)),
        ))?;
    }

    ctx.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn day_label(origin: NaiveDate, offset: f64) -> String {
    origin
        .checked_add_signed(Duration::days(offset.round() as i64))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Five-pointed star around the origin, in pixel offsets.
fn star_vertices(outer: i32, inner: i32) -> Vec<(i32, i32)> {
    (0..10)
        .map(|i| {
            let radius = f64::from(if i % 2 == 0 { outer } else { inner });
            let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
            (
                (radius * angle.cos()).round() as i32,
                (radius * angle.sin()).round() as i32,
            )
        })
        .collect()
}
