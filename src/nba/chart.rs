//! Per-game trend chart, rendered off-screen and printed to the console.
//!
//! One-way observer over the chronologically sorted game log: it draws
//! points/rebounds/assists per game and has no effect on aggregation or
//! ranking. Any failure here is reported by the caller as a warning and
//! never aborts the report.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use crate::error::{NbaError, Result};
use crate::nba::types::GameRow;

const CHART_WIDTH: u16 = 72;
const CHART_HEIGHT: u16 = 18;

/// Stable chronological order; rows without a parseable date sort first
/// and keep their source order among themselves.
pub fn sort_chronologically(rows: &mut [GameRow]) {
    rows.sort_by_key(|r| r.date);
}

fn series(rows: &[GameRow], field: fn(&GameRow) -> f64) -> Vec<(f64, f64)> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| ((i + 1) as f64, field(r)))
        .collect()
}

/// Render a line chart of points/rebounds/assists versus game number as a
/// printable string.
pub fn render_trend(title: &str, rows: &[GameRow]) -> Result<String> {
    if rows.is_empty() {
        return Err(NbaError::Chart {
            message: format!("no games to chart for {}", title),
        });
    }

    let points = series(rows, |r| r.points);
    let rebounds = series(rows, |r| r.rebounds);
    let assists = series(rows, |r| r.assists);

    let y_max = rows
        .iter()
        .flat_map(|r| [r.points, r.rebounds, r.assists])
        .fold(1.0_f64, f64::max);

    let datasets = vec![
        Dataset::default()
            .name("PTS")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .name("REB")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&rebounds),
        Dataset::default()
            .name("AST")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&assists),
    ];

    let x_max = rows.len() as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} per-game trend", title)),
        )
        .x_axis(
            Axis::default()
                .title("Game")
                .bounds([1.0, x_max.max(2.0)])
                .labels(vec![
                    Span::from("1"),
                    Span::from(format!("{}", rows.len())),
                ]),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max * 1.1])
                .labels(vec![
                    Span::from("0"),
                    Span::from(format!("{:.0}", y_max * 1.1)),
                ]),
        );

    let area = Rect::new(0, 0, CHART_WIDTH, CHART_HEIGHT);
    let mut buf = Buffer::empty(area);
    chart.render(area, &mut buf);

    let mut out = String::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            line.push_str(buf.get(x, y).symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    Ok(out)
}
