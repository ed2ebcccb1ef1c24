//! Input handling for the game screen.
//!
//! Keys map to session operations here so main.rs only routes events.

use crate::company::{AllocationArea, FinancialLever};
use crate::core::constants::SLIDER_STEP_PERCENT;
use crate::core::Session;
use crate::engine::Action;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Tabs on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Company,
    Team,
    Product,
    Finance,
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Tab::Company, Tab::Team, Tab::Product, Tab::Finance]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Company => "Company",
            Tab::Team => "Team",
            Tab::Product => "Product",
            Tab::Finance => "Finance",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Company => 0,
            Tab::Team => 1,
            Tab::Product => 2,
            Tab::Finance => 3,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::all()[(self.index() + 1) % 4]
    }

    pub fn prev(&self) -> Tab {
        Tab::all()[(self.index() + 3) % 4]
    }

    /// Number of adjustable rows on the tab.
    pub fn rows(&self) -> usize {
        match self {
            Tab::Team => AllocationArea::all().len(),
            Tab::Finance => FinancialLever::all().len(),
            Tab::Company | Tab::Product => 0,
        }
    }
}

/// Game-screen UI state that is not part of the simulation.
#[derive(Debug, Clone)]
pub struct GameUiState {
    pub active_tab: Tab,
    /// Highlighted slider on the team and finance tabs
    pub selected_row: usize,
}

impl GameUiState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Company,
            selected_row: 0,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.selected_row = 0;
    }
}

impl Default for GameUiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling a game input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// An action ran; carries its log message.
    ActionTaken(String),
    /// Player left the game. The session ends and the tick stops.
    QuitToSelect,
}

/// Maps an action hotkey to its action.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::HireEmployee),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::DevelopProduct),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::LaunchMarketingCampaign),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(Action::SeekInvestment),
        _ => None,
    }
}

pub fn action_hotkey(action: Action) -> char {
    match action {
        Action::HireEmployee => 'H',
        Action::DevelopProduct => 'D',
        Action::LaunchMarketingCampaign => 'M',
        Action::SeekInvestment => 'I',
    }
}

fn adjust_selected(session: &mut Session, ui: &GameUiState, delta: f64) {
    match ui.active_tab {
        Tab::Team => {
            if let Some(area) = AllocationArea::all().get(ui.selected_row) {
                session.adjust_allocation(*area, delta);
            }
        }
        Tab::Finance => {
            if let Some(lever) = FinancialLever::all().get(ui.selected_row) {
                session.adjust_financial(*lever, delta);
            }
        }
        Tab::Company | Tab::Product => {}
    }
}

/// Main dispatcher for game-screen input.
pub fn handle_game_input<R: Rng>(
    key: KeyEvent,
    session: &mut Session,
    ui: &mut GameUiState,
    rng: &mut R,
) -> InputResult {
    if let Some(action) = action_for_key(key.code) {
        let outcome = session.perform(action, rng);
        return InputResult::ActionTaken(outcome.message);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
            return InputResult::QuitToSelect;
        }
        KeyCode::Tab => ui.select_tab(ui.active_tab.next()),
        KeyCode::BackTab => ui.select_tab(ui.active_tab.prev()),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            ui.select_tab(Tab::all()[index]);
        }
        KeyCode::Up => ui.selected_row = ui.selected_row.saturating_sub(1),
        KeyCode::Down => {
            if ui.selected_row + 1 < ui.active_tab.rows() {
                ui.selected_row += 1;
            }
        }
        KeyCode::Left | KeyCode::Char('-') => adjust_selected(session, ui, -SLIDER_STEP_PERCENT),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            adjust_selected(session, ui, SLIDER_STEP_PERCENT)
        }
        _ => {}
    }

    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameData;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> Session {
        let data = GameData::embedded().unwrap();
        Session::new(
            data.scenarios[0].clone(),
            data.config,
            data.random_events,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Company.next(), Tab::Team);
        assert_eq!(Tab::Finance.next(), Tab::Company);
        assert_eq!(Tab::Company.prev(), Tab::Finance);
    }

    #[test]
    fn test_hotkey_runs_action() {
        let mut s = session();
        let mut ui = GameUiState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let employees = s.company.employees;

        let result = handle_game_input(key(KeyCode::Char('h')), &mut s, &mut ui, &mut rng);
        assert_eq!(
            result,
            InputResult::ActionTaken("Hired a new employee. Team is growing!".to_string())
        );
        assert_eq!(s.company.employees, employees + 1);
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for action in Action::all() {
            let c = action_hotkey(action).to_ascii_lowercase();
            assert_eq!(action_for_key(KeyCode::Char(c)), Some(action));
        }
    }

    #[test]
    fn test_number_keys_select_tab() {
        let mut s = session();
        let mut ui = GameUiState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        handle_game_input(key(KeyCode::Char('4')), &mut s, &mut ui, &mut rng);
        assert_eq!(ui.active_tab, Tab::Finance);
    }

    #[test]
    fn test_team_slider_adjusts_allocation() {
        let mut s = session();
        let mut ui = GameUiState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        ui.select_tab(Tab::Team);
        handle_game_input(key(KeyCode::Down), &mut s, &mut ui, &mut rng);
        handle_game_input(key(KeyCode::Left), &mut s, &mut ui, &mut rng);
        assert_eq!(s.company.allocation.marketing, 20.0);

        // Engineering cannot grow past the 5 points freed up
        ui.selected_row = 0;
        handle_game_input(key(KeyCode::Right), &mut s, &mut ui, &mut rng);
        handle_game_input(key(KeyCode::Right), &mut s, &mut ui, &mut rng);
        assert_eq!(s.company.allocation.engineering, 30.0);
        assert_eq!(s.company.allocation.total(), 100.0);
    }

    #[test]
    fn test_row_selection_bounded() {
        let mut s = session();
        let mut ui = GameUiState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        ui.select_tab(Tab::Finance);
        for _ in 0..10 {
            handle_game_input(key(KeyCode::Down), &mut s, &mut ui, &mut rng);
        }
        assert_eq!(ui.selected_row, 2);
    }

    #[test]
    fn test_escape_quits() {
        let mut s = session();
        let mut ui = GameUiState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            handle_game_input(key(KeyCode::Esc), &mut s, &mut ui, &mut rng),
            InputResult::QuitToSelect
        );
    }
}
