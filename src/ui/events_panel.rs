use crate::core::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the current in-game date and the event log, newest first.
pub fn draw_events_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL).title("Events");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Min(0),    // Log
        ])
        .split(inner);

    let date = Paragraph::new(Line::from(Span::styled(
        format!(
            "{}  (month {})",
            session.current_date.format("%B %-d, %Y"),
            session.months_elapsed
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(date, chunks[0]);

    let lines: Vec<Line> = session
        .log()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>6}: ", entry.date_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.message.clone(), style),
            ])
        })
        .collect();

    let log = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(log, chunks[1]);
}
