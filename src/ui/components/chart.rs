use ratatui::text::Line as TextLine;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
};

use crate::utils::{format_amount, truncate_label};

/// One cluster of bars sharing an x-axis label (e.g. a quarter).
pub struct BarGroupData {
    pub label: String,
    /// (value, color) per bar, in series order.
    pub bars: Vec<(f64, Color)>,
}

/// One named line series for the quarterly chart.
pub struct LineSeries {
    pub name: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

/// BarChart values are u64; fractional inputs below this get magnified so
/// small datasets still produce visible bars. The printed value always comes
/// from the original f64.
fn bar_scale_factor(max: f64) -> f64 {
    if max > 0.0 && max < 100.0 {
        100.0
    } else {
        1.0
    }
}

/// Grouped vertical bar chart: one group per label, one colored bar per
/// series entry. An empty `groups` slice renders an empty frame, which is an
/// acceptable degenerate output rather than an error.
pub fn grouped_bar_chart<'a>(title: String, groups: &[BarGroupData]) -> BarChart<'a> {
    let max = groups
        .iter()
        .flat_map(|group| group.bars.iter().map(|(value, _)| *value))
        .fold(0.0_f64, f64::max);
    let factor = bar_scale_factor(max);

    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3)
        .max(((max * factor).ceil() as u64).max(1));

    for group in groups {
        let bars: Vec<Bar> = group
            .bars
            .iter()
            .map(|(value, color)| {
                Bar::default()
                    .value((value * factor).round() as u64)
                    .text_value(format_amount(*value))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(Color::Black).bg(*color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(TextLine::from(group.label.clone()).alignment(Alignment::Center))
                .bars(&bars),
        );
    }

    chart
}

/// Single-group bar chart for ranked entities, one labeled bar per entry.
pub fn ranked_bar_chart<'a>(
    title: String,
    entries: &[(String, f64)],
    color: Color,
) -> BarChart<'a> {
    let max = entries
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);
    let factor = bar_scale_factor(max);
    let bar_width = 9u16;

    let bars: Vec<Bar> = entries
        .iter()
        .map(|(name, value)| {
            Bar::default()
                .value((value * factor).round() as u64)
                .text_value(format_amount(*value))
                .label(TextLine::from(truncate_label(name, bar_width as usize)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(((max * factor).ceil() as u64).max(1))
        .data(BarGroup::default().bars(&bars))
}

/// Line chart over quarters: x is the quarter number, one dataset per
/// series. Bounds cover at least Q1..Q4 so sparse years keep their shape.
pub fn quarterly_line_chart<'a>(title: String, series: &'a [LineSeries]) -> Chart<'a> {
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max);
    let y_upper = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(&s.points)
        })
        .collect();

    let x_labels: Vec<Span> = (1..=4).map(|q| Span::from(format!("Q{q}"))).collect();
    let y_labels: Vec<Span> = [0.0, y_upper / 2.0, y_upper]
        .iter()
        .map(|v| Span::from(format_amount(*v)))
        .collect();

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Quarter")
                .bounds([1.0, 4.0])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Registered users")
                .bounds([0.0, y_upper])
                .labels(y_labels),
        )
}
