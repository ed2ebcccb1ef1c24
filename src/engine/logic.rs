use super::types::ActionOutcome;
use crate::company::{clamp_percent, Company};
use crate::core::constants::*;
use crate::core::format::format_currency_whole;
use crate::data::{GameConfig, RandomEvent};
use rand::seq::SliceRandom;
use rand::Rng;

/// Hires one employee if the company can pay the hire cost.
pub fn hire_employee(company: &Company, config: &GameConfig) -> ActionOutcome {
    if company.cash < config.hire_cost {
        return ActionOutcome::failed(company, "Not enough cash to hire an employee.");
    }

    let mut next = company.clone();
    next.cash -= config.hire_cost;
    next.employees += 1;
    next.burn_rate += config.burn_rate_per_employee;
    ActionOutcome::succeeded(next, "Hired a new employee. Team is growing!")
}

/// Development points earned by the engineering share of the team.
pub fn development_points(company: &Company) -> f64 {
    (company.allocation.engineering / PERCENT_MAX)
        * company.employees as f64
        * DEVELOPMENT_POINTS_PER_EMPLOYEE
}

/// Advances the product. Each product metric only ever grows, capped at 100.
pub fn develop_product(company: &Company) -> ActionOutcome {
    let points = development_points(company).max(0.0);

    let mut next = company.clone();
    next.product_progress = (next.product_progress + points).min(PERCENT_MAX);
    next.features = (next.features + points * FEATURES_SHARE).min(PERCENT_MAX);
    next.user_experience = (next.user_experience + points * USER_EXPERIENCE_SHARE).min(PERCENT_MAX);
    next.performance = (next.performance + points * PERFORMANCE_SHARE).min(PERCENT_MAX);

    let message = format!(
        "{} development progressed. Keep pushing!",
        company.product_name
    );
    ActionOutcome::succeeded(next, message)
}

/// Runs a marketing campaign if affordable. The revenue boost uses the
/// effectiveness after this campaign's increase.
pub fn launch_marketing_campaign(company: &Company, config: &GameConfig) -> ActionOutcome {
    if company.cash < config.marketing_campaign_cost {
        return ActionOutcome::failed(company, "Not enough cash for a marketing campaign.");
    }

    let mut next = company.clone();
    next.cash -= config.marketing_campaign_cost;
    next.marketing_effectiveness += MARKETING_EFFECTIVENESS_STEP;
    next.revenue += MARKETING_REVENUE_BASE
        * (next.marketing_effectiveness / PERCENT_MAX)
        * next.industry_trend;

    let message = format!(
        "Marketing campaign for {} launched. Brand awareness increased!",
        company.product_name
    );
    ActionOutcome::succeeded(next, message)
}

/// Pitches investors. Succeeds 30% of the time with a whole-dollar amount
/// drawn uniformly from [1,000,000, 6,000,000).
pub fn seek_investment<R: Rng>(company: &Company, rng: &mut R) -> ActionOutcome {
    let chance: f64 = rng.gen();
    if chance <= INVESTMENT_SUCCESS_THRESHOLD {
        return ActionOutcome::failed(company, "Investment pitch unsuccessful. Keep trying!");
    }

    let investment = rng.gen_range(INVESTMENT_MIN..INVESTMENT_MIN + INVESTMENT_SPREAD);
    let mut next = company.clone();
    next.cash += investment as f64;

    let message = format!(
        "Secured an investment of {}!",
        format_currency_whole(investment)
    );
    ActionOutcome::succeeded(next, message)
}

/// Revenue added by one month of sales effort, before any satisfaction penalty.
pub fn monthly_revenue_growth(company: &Company, config: &GameConfig) -> f64 {
    (company.allocation.sales / PERCENT_MAX)
        * company.employees as f64
        * config.base_revenue_per_employee
        * company.industry_trend
}

/// Customer satisfaction after one month of support effort, clamped to 0-100.
pub fn next_customer_satisfaction(company: &Company) -> f64 {
    let change = (company.allocation.support / PERCENT_MAX) * SATISFACTION_SUPPORT_WEIGHT
        - SATISFACTION_MONTHLY_DECAY;
    clamp_percent(company.customer_satisfaction + change)
}

/// One monthly tick.
///
/// Cash moves by the current (pre-growth) revenue minus burn. Satisfaction
/// is updated first; if it ends below the threshold this month's revenue
/// growth is dampened by the penalty before being added.
pub fn process_monthly_results(company: &Company, config: &GameConfig) -> ActionOutcome {
    let mut next = company.clone();
    next.cash += company.revenue - company.burn_rate;

    next.customer_satisfaction = next_customer_satisfaction(company);

    let mut growth = monthly_revenue_growth(company, config);
    if next.customer_satisfaction < config.customer_satisfaction_threshold {
        growth *= config.customer_satisfaction_penalty;
    }
    next.revenue += growth;

    ActionOutcome::succeeded(next, "Monthly results processed.")
}

/// Applies one uniformly chosen event from `events`.
/// Returns `None` when the table is empty.
pub fn trigger_random_event<R: Rng>(
    company: &Company,
    events: &[RandomEvent],
    rng: &mut R,
) -> Option<ActionOutcome> {
    let event = events.choose(rng)?;
    Some(apply_random_event(company, event))
}

/// Applies a specific event. Effects on unknown or non-numeric fields are
/// skipped.
pub fn apply_random_event(company: &Company, event: &RandomEvent) -> ActionOutcome {
    let mut next = company.clone();
    event.apply_to(&mut next);
    ActionOutcome::succeeded(next, event.message.clone())
}
