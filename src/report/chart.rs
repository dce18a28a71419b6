//! Plain-text charts of a search history.

use std::fmt::Write;

use super::history_header;
use crate::compute::search::History;

pub const DEFAULT_CHART_WIDTH: usize = 64;
pub const DEFAULT_CHART_HEIGHT: usize = 12;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const LABEL_WIDTH: usize = 10;

/// Shrink `values` to at most `width` points, averaging each bucket.
pub fn downsample(values: &[f64], width: usize) -> Vec<f64> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    (0..width)
        .map(|i| {
            let start = i * values.len() / width;
            let end = (i + 1) * values.len() / width;
            let bucket = &values[start..end];
            bucket.iter().sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Level of `value` in `0..levels` on the `[min, max]` scale.
fn level(value: f64, min: f64, max: f64, levels: usize) -> usize {
    if max <= min {
        return 0;
    }
    let scaled = (value - min) / (max - min) * (levels - 1) as f64;
    (scaled.round() as usize).min(levels - 1)
}

/// Scatter chart of `values` against their index, `height` rows tall.
pub fn line_chart(values: &[f64], width: usize, height: usize) -> String {
    if values.is_empty() || width == 0 || height == 0 {
        return "(no data)\n".to_string();
    }

    let points = downsample(values, width);
    let (min, max) = bounds(&points);
    let mut grid = vec![vec![' '; points.len()]; height];
    for (x, &value) in points.iter().enumerate() {
        let y = level(value, min, max, height);
        grid[height - 1 - y][x] = '*';
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{max:>LABEL_WIDTH$.2}")
        } else if row == height - 1 {
            format!("{min:>LABEL_WIDTH$.2}")
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{label} |{}", line.trim_end());
    }
    let _ = writeln!(
        out,
        "{} +{}",
        " ".repeat(LABEL_WIDTH),
        "-".repeat(points.len())
    );
    let _ = writeln!(
        out,
        "{} 0{:>pad$}",
        " ".repeat(LABEL_WIDTH),
        values.len(),
        pad = points.len().saturating_sub(1)
    );
    out
}

/// One-line bar rendering of `values` on a fixed `[min, max]` scale.
pub fn sparkline(values: &[f64], width: usize, min: f64, max: f64) -> String {
    downsample(values, width)
        .into_iter()
        .map(|v| SPARK_LEVELS[level(v, min, max, SPARK_LEVELS.len())])
        .collect()
}

/// Chart of the aggregate column over evaluations.
pub fn aggregate_chart(history: &History, width: usize, height: usize) -> String {
    line_chart(&history.aggregates(), width, height)
}

/// One sparkline ribbon per history column, all on a shared scale.
pub fn ribbon_chart(history: &History, width: usize) -> String {
    if history.is_empty() {
        return "(no data)\n".to_string();
    }
    let (min, max) = bounds(history.as_slice());

    let mut out = String::new();
    for (column, name) in history_header(history.team_size()).iter().enumerate() {
        let ribbon = sparkline(&history.column(column), width, min, max);
        let _ = writeln!(out, "{name:>LABEL_WIDTH$} {ribbon}");
    }
    let _ = writeln!(out, "{} scale {min:.2} .. {max:.2}", " ".repeat(LABEL_WIDTH));
    out
}
