pub mod events_panel;
mod game_scene;
pub mod scenario_creation;
pub mod scenario_select;

use crate::core::Session;
use crate::input::{GameUiState, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Draws the full game screen: header, tab bar, active tab, event log, footer.
pub fn draw_game(frame: &mut Frame, session: &Session, ui: &GameUiState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(12),   // Tab body + events
            Constraint::Length(1), // Footer
        ])
        .split(size);

    draw_header(frame, v_chunks[0], session);
    draw_tab_bar(frame, v_chunks[1], ui.active_tab);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(v_chunks[2]);

    game_scene::draw_tab_body(frame, h_chunks[0], session, ui);
    events_panel::draw_events_panel(frame, h_chunks[1], session);

    draw_footer(frame, v_chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, session: &Session) {
    let header = Paragraph::new(format!(
        "TechStartup Simulator Pro  |  {}  |  {}",
        session.scenario.name, session.company.product_name
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(active.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new("[H/D/M/I] Actions  [Tab/1-4] Switch tab  [Esc] End game")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
