use crate::data::{CustomScenarioDraft, Scenario};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields of the custom scenario form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    InitialCash,
    InitialEmployees,
    ProductName,
    IndustryTrend,
}

impl FormField {
    pub fn all() -> [FormField; 6] {
        [
            FormField::Name,
            FormField::Description,
            FormField::InitialCash,
            FormField::InitialEmployees,
            FormField::ProductName,
            FormField::IndustryTrend,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Startup Name",
            FormField::Description => "Description",
            FormField::InitialCash => "Initial Cash",
            FormField::InitialEmployees => "Initial Employees",
            FormField::ProductName => "Product Name",
            FormField::IndustryTrend => "Industry Trend (1.0 - 2.0)",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormField::InitialCash | FormField::InitialEmployees | FormField::IndustryTrend
        )
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }
}

pub struct ScenarioCreationScreen {
    pub draft: CustomScenarioDraft,
    pub focused: FormField,
    pub validation_error: Option<String>,
}

impl ScenarioCreationScreen {
    pub fn new() -> Self {
        Self {
            draft: CustomScenarioDraft::default(),
            focused: FormField::Name,
            validation_error: None,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.draft.name,
            FormField::Description => &mut self.draft.description,
            FormField::InitialCash => &mut self.draft.initial_cash,
            FormField::InitialEmployees => &mut self.draft.initial_employees,
            FormField::ProductName => &mut self.draft.product_name,
            FormField::IndustryTrend => &mut self.draft.industry_trend,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Description => &self.draft.description,
            FormField::InitialCash => &self.draft.initial_cash,
            FormField::InitialEmployees => &self.draft.initial_employees,
            FormField::ProductName => &self.draft.product_name,
            FormField::IndustryTrend => &self.draft.industry_trend,
        }
    }

    /// Numeric fields only accept digits, a sign, and a decimal point.
    pub fn handle_char_input(&mut self, c: char) {
        let field = self.focused;
        if field.is_numeric() && !(c.is_ascii_digit() || c == '.' || c == '-') {
            return;
        }
        self.value_mut(field).push(c);
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
        self.validation_error = None;
    }

    pub fn next_field(&mut self) {
        let fields = FormField::all();
        self.focused = fields[(self.focused.position() + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = FormField::all();
        self.focused = fields[(self.focused.position() + fields.len() - 1) % fields.len()];
    }

    /// Validates the form. On failure the message is kept for display.
    pub fn submit(&mut self, created_at_millis: i64) -> Option<Scenario> {
        match self.draft.build(created_at_millis) {
            Ok(scenario) => Some(scenario),
            Err(e) => {
                self.validation_error = Some(e);
                None
            }
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3)]; // Title
        constraints.extend(FormField::all().iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Length(2)); // Validation
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(3)); // Controls

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints(constraints)
            .split(area);

        let title = Paragraph::new("Create Your Own Scenario")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        for (i, field) in FormField::all().iter().enumerate() {
            let focused = *field == self.focused;
            let text = if focused {
                format!("{}_", self.value(*field))
            } else {
                self.value(*field).to_string()
            };
            let border_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let input = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(field.label()),
            );
            f.render_widget(input, chunks[i + 1]);
        }

        let validation_index = FormField::all().len() + 1;
        if let Some(error) = &self.validation_error {
            let line = Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(line), chunks[validation_index]);
        }

        let controls =
            Paragraph::new("[Tab/↓] Next field    [Enter] Create Scenario    [Esc] Cancel")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[validation_index + 2]);
    }
}

impl Default for ScenarioCreationScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut ScenarioCreationScreen, s: &str) {
        for c in s.chars() {
            screen.handle_char_input(c);
        }
    }

    #[test]
    fn test_fill_and_submit() {
        let mut screen = ScenarioCreationScreen::new();
        type_str(&mut screen, "Garage Labs");
        screen.next_field();
        type_str(&mut screen, "Two founders");
        screen.next_field();
        screen.next_field();
        screen.next_field();
        assert_eq!(screen.focused, FormField::ProductName);
        type_str(&mut screen, "Gizmo");

        let scenario = screen.submit(42).unwrap();
        assert_eq!(scenario.id, "custom-42");
        assert_eq!(scenario.name, "Garage Labs");
        assert_eq!(scenario.initial_employees, 1);
    }

    #[test]
    fn test_submit_empty_form_reports_error() {
        let mut screen = ScenarioCreationScreen::new();
        assert!(screen.submit(0).is_none());
        assert_eq!(
            screen.validation_error.as_deref(),
            Some("Startup name is required")
        );

        screen.handle_char_input('A');
        assert!(screen.validation_error.is_none());
    }

    #[test]
    fn test_numeric_fields_reject_letters() {
        let mut screen = ScenarioCreationScreen::new();
        screen.focused = FormField::InitialEmployees;
        screen.handle_backspace();
        type_str(&mut screen, "x5y");
        assert_eq!(screen.value(FormField::InitialEmployees), "5");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut screen = ScenarioCreationScreen::new();
        screen.prev_field();
        assert_eq!(screen.focused, FormField::IndustryTrend);
        screen.next_field();
        assert_eq!(screen.focused, FormField::Name);
    }
}
