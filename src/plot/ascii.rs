//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - daily sales: `o`, joined by a `-` line in entry order
//! - peak: `*`

use crate::chart::{PeakChart, fmt_amount};
use crate::plot::PlotData;

/// Render a peak chart as a fixed-size character grid.
pub fn render_ascii_plot(chart: &PeakChart, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let Some(data) = PlotData::from_chart(chart) else {
        return "Plot: no data\n".to_string();
    };

    let (x_min, x_max) = data.x_range();
    let (y_min, y_max) = data.y_range(0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Line first so markers overlay it.
    let cells: Vec<(usize, usize)> = data
        .points
        .iter()
        .map(|&(x, y)| (map_x(x, x_min, x_max, width), map_y(y, y_min, y_max, height)))
        .collect();
    for pair in cells.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = 'o';
    }
    if let Some(peak) = &data.peak {
        let x = map_x(peak.x, x_min, x_max, width);
        let y = map_y(peak.y, y_min, y_max, height);
        grid[y][x] = '*';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: dates=[{}, {}] | sales=[{y_min:.2}, {y_max:.2}]\n",
        data.origin.format("%Y-%m-%d"),
        data.last.format("%Y-%m-%d"),
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    if let Some(peak) = &data.peak {
        out.push_str(&format!(
            "Legend: o daily sales | * peak {} (${})\n",
            peak.label,
            fmt_amount(peak.y)
        ));
    }

    out
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
