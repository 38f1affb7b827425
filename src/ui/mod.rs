pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 40 || area.height < 16 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x16.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(10),
        ])
        .split(area);

    widgets::search::render(frame, chunks[0], state);
    render_status_line(frame, chunks[1], state);
    widgets::cards::render(frame, chunks[2], state);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(alert) = &state.alert {
        Line::from(Span::styled(
            alert.clone(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
    } else if state.loading {
        Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Enter add | Left/Right select | Tab trends | Del remove | Esc quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
