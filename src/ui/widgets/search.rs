use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let query = if state.query.is_empty() {
        Span::styled("Search for a city", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            state.query.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        query,
        Span::styled("▏", Style::default().fg(Color::Cyan)),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Add city"));
    frame.render_widget(paragraph, area);
}
