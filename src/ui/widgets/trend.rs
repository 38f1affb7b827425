use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::domain::weather::TrendSeries;

pub(super) fn trend_lines(trend: &TrendSeries, width: usize) -> Vec<Line<'static>> {
    if trend.is_empty() {
        return vec![Line::from(Span::styled(
            "trend unavailable",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let chart_width = width.clamp(8, 48);
    let min = trend
        .temperatures
        .iter()
        .copied()
        .fold(f32::INFINITY, f32::min);
    let max = trend
        .temperatures
        .iter()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);
    let range_label = match (trend.dates.first(), trend.dates.last()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => String::new(),
    };

    vec![
        Line::from(Span::styled(
            "Temperature trend",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            sparkline(&trend.temperatures, chart_width),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("{range_label}  {min:.1}°C to {max:.1}°C"),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn sparkline(values: &[f32], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);

    (0..width)
        .map(|idx| {
            let start = idx * values.len() / width;
            let end = (((idx + 1) * values.len() / width).max(start + 1)).min(values.len());
            let avg = values[start..end].iter().sum::<f32>() / (end - start) as f32;
            let norm = ((avg - min) / span).clamp(0.0, 1.0);
            BARS[(norm * (BARS.len() - 1) as f32).round() as usize]
        })
        .collect()
}
