//! Tab bodies for the game screen.

use crate::company::{AllocationArea, FinancialLever};
use crate::core::format::{format_currency, format_percent};
use crate::core::Session;
use crate::engine::Action;
use crate::input::{action_hotkey, GameUiState, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw_tab_body(frame: &mut Frame, area: Rect, session: &Session, ui: &GameUiState) {
    match ui.active_tab {
        Tab::Company => draw_company_tab(frame, area, session),
        Tab::Team => draw_team_tab(frame, area, session, ui.selected_row),
        Tab::Product => draw_product_tab(frame, area, session),
        Tab::Finance => draw_finance_tab(frame, area, session, ui.selected_row),
    }
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(card, area);
}

fn draw_company_tab(frame: &mut Frame, area: Rect, session: &Session) {
    let company = &session.company;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Money
            Constraint::Length(3), // People
            Constraint::Min(0),    // Actions
        ])
        .split(area);

    let money = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);
    let cash_color = if company.cash < 0.0 {
        Color::Red
    } else {
        Color::Green
    };
    stat_card(frame, money[0], "Cash", format_currency(company.cash), cash_color);
    stat_card(
        frame,
        money[1],
        "Revenue",
        format_currency(company.revenue),
        Color::Cyan,
    );
    stat_card(
        frame,
        money[2],
        "Burn Rate",
        format_currency(company.burn_rate),
        Color::Yellow,
    );

    let people = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);
    stat_card(
        frame,
        people[0],
        "Employees",
        company.employees.to_string(),
        Color::White,
    );
    stat_card(
        frame,
        people[1],
        "Satisfaction",
        format_percent(company.customer_satisfaction),
        satisfaction_color(company.customer_satisfaction, session),
    );
    stat_card(
        frame,
        people[2],
        "Marketing",
        format!("{:.0}", company.marketing_effectiveness),
        Color::Magenta,
    );

    let config = session.config();
    let mut lines = vec![Line::from("")];
    for action in Action::all() {
        let cost = match action {
            Action::HireEmployee => format!(" ({})", format_currency(config.hire_cost)),
            Action::LaunchMarketingCampaign => {
                format!(" ({})", format_currency(config.marketing_campaign_cost))
            }
            Action::DevelopProduct | Action::SeekInvestment => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", action_hotkey(action)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action.label()),
            Span::styled(cost, Style::default().fg(Color::DarkGray)),
        ]));
    }
    let actions = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(actions, rows[2]);
}

fn satisfaction_color(value: f64, session: &Session) -> Color {
    if value < session.config().customer_satisfaction_threshold {
        Color::Red
    } else if value < 80.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Draws one slider row; the highlighted row gets a yellow border.
fn slider(frame: &mut Frame, area: Rect, title: &str, value: f64, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format_percent(value))
        .ratio((value / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

fn slider_layout(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(3); count];
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn draw_team_tab(frame: &mut Frame, area: Rect, session: &Session, selected_row: usize) {
    let areas = AllocationArea::all();
    let chunks = slider_layout(area, areas.len());
    let allocation = &session.company.allocation;

    for (i, a) in areas.iter().enumerate() {
        slider(frame, chunks[i], a.name(), allocation.get(*a), i == selected_row);
    }

    let footer = Paragraph::new(format!(
        "Allocated: {} of 100%    [↑↓] Select  [←→] Adjust",
        format_percent(allocation.total())
    ))
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[areas.len()]);
}

fn draw_product_tab(frame: &mut Frame, area: Rect, session: &Session) {
    let company = &session.company;
    let metrics = [
        ("Overall Progress", company.product_progress, Color::Green),
        ("Features", company.features, Color::Cyan),
        ("User Experience", company.user_experience, Color::Magenta),
        ("Performance", company.performance, Color::Yellow),
    ];
    let chunks = slider_layout(area, metrics.len());

    for (i, (title, value, color)) in metrics.iter().enumerate() {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(*title))
            .gauge_style(Style::default().fg(*color))
            .label(format_percent(*value))
            .ratio((value / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, chunks[i]);
    }

    let footer = Paragraph::new(format!("Product: {}", company.product_name))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[metrics.len()]);
}

fn draw_finance_tab(frame: &mut Frame, area: Rect, session: &Session, selected_row: usize) {
    let levers = FinancialLever::all();
    let chunks = slider_layout(area, levers.len());

    for (i, lever) in levers.iter().enumerate() {
        slider(
            frame,
            chunks[i],
            lever.name(),
            session.financials.get(*lever),
            i == selected_row,
        );
    }

    let footer = Paragraph::new("[↑↓] Select  [←→] Adjust").style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[levers.len()]);
}
