use crate::company::{AllocationArea, Company, FinancialLever, Financials};
use crate::data::{GameConfig, RandomEvent, Scenario};
use crate::engine::{self, Action, ActionOutcome};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info};

/// One line of the event log, stamped with the in-game date.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub message: String,
}

impl LogEntry {
    /// Short date label, e.g. "Mar 4"
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// An active game: the single owner of the company record.
///
/// All writes go through `&mut self`, so user actions and the periodic tick
/// are serialized by whoever holds the session.
#[derive(Debug, Clone)]
pub struct Session {
    pub scenario: Scenario,
    pub company: Company,
    pub financials: Financials,
    pub current_date: NaiveDate,
    pub months_elapsed: u32,
    config: GameConfig,
    random_events: Vec<RandomEvent>,
    /// Newest first, at most `config.max_visible_events` entries
    log: VecDeque<LogEntry>,
}

impl Session {
    /// Starts a game from `scenario` on `start_date` and logs the welcome message.
    pub fn new(
        scenario: Scenario,
        config: GameConfig,
        random_events: Vec<RandomEvent>,
        start_date: NaiveDate,
    ) -> Self {
        let company = Company::from_scenario(&scenario, &config);
        let capacity = config.max_visible_events;
        let mut session = Self {
            scenario,
            company,
            financials: Financials::default(),
            current_date: start_date,
            months_elapsed: 0,
            config,
            random_events,
            log: VecDeque::with_capacity(capacity),
        };

        let welcome = format!(
            "Welcome to your {}! Your journey with {} begins today.",
            session.scenario.name, session.company.product_name
        );
        session.add_event(welcome);
        info!(
            scenario = %session.scenario.id,
            cash = session.company.cash,
            employees = session.company.employees,
            "game started"
        );
        session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn random_events(&self) -> &[RandomEvent] {
        &self.random_events
    }

    /// Event log, newest first.
    pub fn log(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Prepends a message stamped with the current date, dropping the oldest
    /// entries beyond the configured limit.
    pub fn add_event(&mut self, message: impl Into<String>) {
        self.log.push_front(LogEntry {
            date: self.current_date,
            message: message.into(),
        });
        self.log.truncate(self.config.max_visible_events);
    }

    pub fn advance_days(&mut self, days: i64) {
        self.current_date += Duration::days(days);
    }

    /// Replaces the company with the outcome's and logs its message.
    fn commit(&mut self, outcome: &ActionOutcome) {
        self.company = outcome.company.clone();
        self.add_event(outcome.message.clone());
    }

    /// Runs a player action, logs it, and advances the calendar.
    pub fn perform<R: Rng>(&mut self, action: Action, rng: &mut R) -> ActionOutcome {
        let outcome = match action {
            Action::HireEmployee => engine::hire_employee(&self.company, &self.config),
            Action::DevelopProduct => engine::develop_product(&self.company),
            Action::LaunchMarketingCampaign => {
                engine::launch_marketing_campaign(&self.company, &self.config)
            }
            Action::SeekInvestment => engine::seek_investment(&self.company, rng),
        };

        self.commit(&outcome);
        let days = action.days(&outcome);
        self.advance_days(days);
        info!(
            action = action.label(),
            success = outcome.success,
            cash = self.company.cash,
            days,
            "action performed"
        );
        outcome
    }

    /// Applies one monthly tick and advances the calendar by the configured
    /// month length.
    pub fn process_month(&mut self) -> ActionOutcome {
        let outcome = engine::process_monthly_results(&self.company, &self.config);
        self.commit(&outcome);
        self.advance_days(self.config.monthly_time_increment as i64);
        self.months_elapsed += 1;
        debug!(
            month = self.months_elapsed,
            cash = self.company.cash,
            revenue = self.company.revenue,
            satisfaction = self.company.customer_satisfaction,
            "monthly results"
        );
        outcome
    }

    /// Applies a uniformly chosen random event, if the table has any.
    pub fn trigger_random_event<R: Rng>(&mut self, rng: &mut R) -> Option<ActionOutcome> {
        let outcome = engine::trigger_random_event(&self.company, &self.random_events, rng)?;
        self.commit(&outcome);
        info!(message = %outcome.message, "random event");
        Some(outcome)
    }

    /// Sets a team allocation slider, keeping the total within 100.
    pub fn set_allocation(&mut self, area: AllocationArea, value: f64) {
        self.company.allocation.set(area, value);
    }

    pub fn adjust_allocation(&mut self, area: AllocationArea, delta: f64) {
        self.company.allocation.adjust(area, delta);
    }

    pub fn set_financial(&mut self, lever: FinancialLever, value: f64) {
        self.financials.set(lever, value);
    }

    pub fn adjust_financial(&mut self, lever: FinancialLever, delta: f64) {
        self.financials.adjust(lever, delta);
    }
}
