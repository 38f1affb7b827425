use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::AppState,
    domain::weather::{WeatherRecord, icon_glyph, parse_sample_time, trend_label},
};

use super::trend;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.records.is_empty() {
        let empty = Paragraph::new("No weather data to display")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let count = u32::try_from(state.records.len()).unwrap_or(1);
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, count); count as usize]).split(area);

    for (idx, record) in state.records.iter().enumerate() {
        render_card(frame, columns[idx], state, idx, record);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    idx: usize,
    record: &WeatherRecord,
) {
    let border_style = if idx == state.selected_card {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {}, {} ", record.city_name, record.country_code));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = card_lines(record);
    if state.selected_trend == Some(idx) {
        lines.push(Line::default());
        lines.extend(trend::trend_lines(
            &record.trend,
            inner.width.saturating_sub(2) as usize,
        ));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

fn card_lines(record: &WeatherRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{}  {}°C",
                glyph_from_icon_url(&record.icon_url),
                record.current_temp_c
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(format!(
            "humidity {:.0}%  wind {} m/s",
            record.humidity_pct, record.wind_speed
        )),
        Line::from(format!(
            "min {}°C  max {}°C",
            record.min_temp_c, record.max_temp_c
        )),
        Line::default(),
    ];

    for day in &record.forecast {
        lines.push(Line::from(vec![
            Span::styled(day_label(&day.date), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("  {} {}°C", icon_glyph(&day.icon_code), day.temp_c)),
        ]));
    }

    lines
}

fn day_label(date: &str) -> String {
    parse_sample_time(date)
        .map(trend_label)
        .unwrap_or_else(|| date.to_string())
}

/// Recovers the bare icon code from the record's icon URL
/// (`.../wn/04d@2x.png` yields `04d`).
fn glyph_from_icon_url(url: &str) -> &'static str {
    let code = url
        .rsplit('/')
        .next()
        .and_then(|file| file.split('@').next())
        .unwrap_or("");
    icon_glyph(code)
}
