use crate::data::Scenario;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What the highlighted entry on the select screen refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Scenario(usize),
    CreateCustom,
}

pub struct ScenarioSelectScreen {
    pub selected_index: usize,
}

impl ScenarioSelectScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Entries are the scenarios followed by the "create your own" card.
    pub fn entry_count(scenarios: &[Scenario]) -> usize {
        scenarios.len() + 1
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, scenarios: &[Scenario]) {
        if self.selected_index + 1 < Self::entry_count(scenarios) {
            self.selected_index += 1;
        }
    }

    pub fn selection(&self, scenarios: &[Scenario]) -> Selection {
        if self.selected_index < scenarios.len() {
            Selection::Scenario(self.selected_index)
        } else {
            Selection::CreateCustom
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, scenarios: &[Scenario]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Scenario cards
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Choose your startup scenario")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let mut lines = Vec::new();
        for (i, scenario) in scenarios.iter().enumerate() {
            self.push_card(&mut lines, i, &scenario.name, &scenario.description);
        }
        self.push_card(
            &mut lines,
            scenarios.len(),
            "Create Your Own Scenario",
            "Add your custom details and simulate that",
        );

        let list = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Scenarios"))
            .wrap(Wrap { trim: true });
        f.render_widget(list, chunks[1]);

        let controls = Paragraph::new("[↑↓] Select    [Enter] Start    [Q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }

    fn push_card(&self, lines: &mut Vec<Line<'static>>, index: usize, name: &str, description: &str) {
        let selected = index == self.selected_index;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, name),
            name_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
}

impl Default for ScenarioSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenarios() -> Vec<Scenario> {
        (0..2)
            .map(|i| Scenario {
                id: format!("s{i}"),
                name: format!("Scenario {i}"),
                description: String::new(),
                initial_cash: 1.0,
                initial_employees: 1,
                product_name: "P".to_string(),
                industry_trend: 1.0,
            })
            .collect()
    }

    #[test]
    fn test_last_entry_is_create_custom() {
        let scenarios = scenarios();
        let mut screen = ScenarioSelectScreen::new();
        assert_eq!(screen.selection(&scenarios), Selection::Scenario(0));

        for _ in 0..5 {
            screen.move_down(&scenarios);
        }
        assert_eq!(screen.selected_index, 2);
        assert_eq!(screen.selection(&scenarios), Selection::CreateCustom);

        screen.move_up();
        assert_eq!(screen.selection(&scenarios), Selection::Scenario(1));
    }

    #[test]
    fn test_empty_list_offers_only_custom() {
        let screen = ScenarioSelectScreen::new();
        assert_eq!(screen.selection(&[]), Selection::CreateCustom);
    }
}
