use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};

/// Tunable constants governing costs, rates, and thresholds.
/// Loaded once from `game-config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Monthly cost added to the burn rate per employee
    pub burn_rate_per_employee: f64,
    /// One-off cash cost of a hire
    pub hire_cost: f64,
    pub marketing_campaign_cost: f64,
    /// Monthly revenue growth per employee at 100% sales allocation
    pub base_revenue_per_employee: f64,
    /// Calendar days advanced by one monthly tick
    pub monthly_time_increment: u32,
    /// Event log length
    pub max_visible_events: usize,
    /// Chance (0-1) that a tick also triggers a random event
    pub random_event_probability: f64,
    /// Satisfaction below this dampens revenue growth
    pub customer_satisfaction_threshold: f64,
    /// Multiplier (0-1) applied to revenue growth while below the threshold
    pub customer_satisfaction_penalty: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            burn_rate_per_employee: 10_000.0,
            hire_cost: 50_000.0,
            marketing_campaign_cost: 50_000.0,
            base_revenue_per_employee: 5_000.0,
            monthly_time_increment: 30,
            max_visible_events: 10,
            random_event_probability: 0.2,
            customer_satisfaction_threshold: 50.0,
            customer_satisfaction_penalty: 0.9,
        }
    }
}

impl GameConfig {
    /// Rejects values that would make the simulation meaningless.
    pub fn validate(&self) -> DataResult<()> {
        if !(0.0..=1.0).contains(&self.random_event_probability) {
            return Err(DataError::Invalid(format!(
                "randomEventProbability must be between 0 and 1, got {}",
                self.random_event_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.customer_satisfaction_penalty) {
            return Err(DataError::Invalid(format!(
                "customerSatisfactionPenalty must be between 0 and 1, got {}",
                self.customer_satisfaction_penalty
            )));
        }
        if self.max_visible_events == 0 {
            return Err(DataError::Invalid(
                "maxVisibleEvents must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
