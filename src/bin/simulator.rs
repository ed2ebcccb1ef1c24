//! TechSim Headless Simulator
//!
//! Plays a scenario month by month with a fixed action policy and no UI,
//! using the same `monthly_tick()` as the terminal game. Useful for checking
//! the balance of game-config.json and the event table.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]

use chrono::NaiveDate;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;
use techsim::core::format::{format_currency, format_percent};
use techsim::core::{monthly_tick, Session, TickEvent, TickResult};
use techsim::data::{GameData, Scenario};
use techsim::engine::Action;
use techsim::logging;
use tracing::{debug, info};

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(version)]
#[command(about = "Headless TechSim balance simulator", long_about = None)]
struct SimConfig {
    /// Directory containing the game data files (defaults to the built-in data)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Scenario id to play (defaults to the first scenario)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Months to simulate
    #[arg(short, long, default_value_t = 24)]
    months: u32,

    /// RNG seed; run N uses seed + N, wrapping around at u64::MAX
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of runs with incrementing seeds
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Per-month event output
    #[arg(short, long)]
    verbose: bool,

    /// Only final summary line
    #[arg(short, long)]
    quiet: bool,
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    months: u32,
    hires: u32,
    failed_hires: u32,
    campaigns: u32,
    pitches: u32,
    investments_won: u32,
    random_events: u32,
    /// First month that closed with negative cash
    first_negative_month: Option<u32>,
    final_cash: f64,
    final_revenue: f64,
    final_employees: u32,
    final_progress: f64,
    final_satisfaction: f64,
}

impl SimStats {
    fn process_tick(&mut self, result: &TickResult, session: &Session) {
        self.months = session.months_elapsed;
        if result.random_event_fired() {
            self.random_events += 1;
        }
        if session.company.cash < 0.0 && self.first_negative_month.is_none() {
            self.first_negative_month = Some(session.months_elapsed);
        }
    }

    fn finalize(&mut self, session: &Session) {
        let company = &session.company;
        self.final_cash = company.cash;
        self.final_revenue = company.revenue;
        self.final_employees = company.employees;
        self.final_progress = company.product_progress;
        self.final_satisfaction = company.customer_satisfaction;
    }
}

// ── Action Policy ────────────────────────────────────────────────────

/// Picks this month's actions from the current state.
///
/// Develops until the product is finished, hires and markets while the
/// runway is comfortable, and pitches investors when cash runs low.
fn choose_actions(session: &Session) -> Vec<Action> {
    let company = &session.company;
    let config = session.config();
    let mut actions = Vec::new();

    if company.product_progress < 100.0 {
        actions.push(Action::DevelopProduct);
    }
    if company.cash > config.hire_cost + company.burn_rate * 6.0 {
        actions.push(Action::HireEmployee);
    }
    if company.cash > config.marketing_campaign_cost * 4.0 {
        actions.push(Action::LaunchMarketingCampaign);
    }
    if company.cash < company.burn_rate * 3.0 {
        actions.push(Action::SeekInvestment);
    }
    actions
}

// ── Core Simulation Loop ─────────────────────────────────────────────

fn run_simulation(config: &SimConfig, data: &GameData, scenario: &Scenario, seed: u64) -> SimStats {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let mut session = Session::new(
        scenario.clone(),
        data.config.clone(),
        data.random_events.clone(),
        start,
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stats = SimStats::default();

    for _ in 0..config.months {
        for action in choose_actions(&session) {
            let outcome = session.perform(action, &mut rng);
            match action {
                Action::HireEmployee if outcome.success => stats.hires += 1,
                Action::HireEmployee => stats.failed_hires += 1,
                Action::LaunchMarketingCampaign if outcome.success => stats.campaigns += 1,
                Action::SeekInvestment => {
                    stats.pitches += 1;
                    if outcome.success {
                        stats.investments_won += 1;
                    }
                }
                _ => {}
            }
            debug!(?action, success = outcome.success, "policy action");
        }

        let result = monthly_tick(&mut session, &mut rng);
        stats.process_tick(&result, &session);

        if config.verbose {
            print_tick_events(&session, &result);
        }
    }

    stats.finalize(&session);
    stats
}

// ── Verbose Output ───────────────────────────────────────────────────

fn print_tick_events(session: &Session, result: &TickResult) {
    for event in &result.events {
        let label = match event {
            TickEvent::MonthlyResults {
                cash_delta, month, ..
            } => format!(
                "Month {month}: cash {} ({}{})",
                format_currency(session.company.cash),
                if *cash_delta >= 0.0 { "+" } else { "" },
                format_currency(*cash_delta)
            ),
            TickEvent::RandomEvent { message } => format!("Event: {message}"),
        };
        println!("[{}] {label}", session.current_date);
    }
}

// ── Report Output ────────────────────────────────────────────────────

fn print_summary(stats: &SimStats, seed: u64, scenario: &Scenario, config: &SimConfig) {
    if config.quiet {
        println!(
            "seed={seed} months={} cash={:.0} revenue={:.0} employees={} progress={:.0} satisfaction={:.0} events={}",
            stats.months,
            stats.final_cash,
            stats.final_revenue,
            stats.final_employees,
            stats.final_progress,
            stats.final_satisfaction,
            stats.random_events,
        );
        return;
    }

    println!("============================================================");
    println!("  TechSim Simulation Report  (seed={seed})");
    println!("============================================================");
    println!();
    println!("Scenario: {} ({})", scenario.name, scenario.id);
    println!("Duration: {} months", stats.months);
    println!();

    println!("--- Final State ---");
    println!(
        "Cash: {}  |  Revenue: {}/mo",
        format_currency(stats.final_cash),
        format_currency(stats.final_revenue)
    );
    println!(
        "Employees: {}  |  Product: {}  |  Satisfaction: {}",
        stats.final_employees,
        format_percent(stats.final_progress),
        format_percent(stats.final_satisfaction)
    );
    match stats.first_negative_month {
        Some(month) => println!("Cash first went negative in month {month}"),
        None => println!("Cash never went negative"),
    }
    println!();

    println!("--- Actions ---");
    println!(
        "Hires: {}  |  Failed hires: {}  |  Campaigns: {}",
        stats.hires, stats.failed_hires, stats.campaigns
    );
    println!(
        "Pitches: {}  |  Investments won: {}",
        stats.pitches, stats.investments_won
    );
    println!("Random events: {}", stats.random_events);
    println!();
}

fn print_multi_run_summary(all_stats: &[SimStats]) {
    let n = all_stats.len() as f64;
    println!("============================================================");
    println!("  Aggregate Results ({} runs)", all_stats.len());
    println!("============================================================");
    println!();

    let row = |name: &str, vals: Vec<f64>| {
        let min = vals.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let avg = vals.iter().sum::<f64>() / n;
        println!("{:<20} {:>14.0} {:>14.0} {:>14.0}", name, min, avg, max);
    };

    println!("{:<20} {:>14} {:>14} {:>14}", "Metric", "Min", "Avg", "Max");
    println!("{}", "-".repeat(64));
    row("Final Cash", all_stats.iter().map(|s| s.final_cash).collect());
    row(
        "Final Revenue",
        all_stats.iter().map(|s| s.final_revenue).collect(),
    );
    row(
        "Employees",
        all_stats.iter().map(|s| s.final_employees as f64).collect(),
    );
    row(
        "Satisfaction",
        all_stats.iter().map(|s| s.final_satisfaction).collect(),
    );
    row(
        "Random Events",
        all_stats.iter().map(|s| s.random_events as f64).collect(),
    );
    println!();

    let negative = all_stats
        .iter()
        .filter(|s| s.first_negative_month.is_some())
        .count();
    println!("Runs that went cash-negative: {negative}/{}", all_stats.len());
    println!();
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let config = SimConfig::parse();
    logging::init_stderr_logging(config.verbose);

    let data = match GameData::load(config.data_dir.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let scenario = match &config.scenario {
        Some(id) => match data.find_scenario(id) {
            Some(s) => s.clone(),
            None => {
                eprintln!("Unknown scenario: {id}");
                eprintln!("Available: {}", scenario_ids(&data.scenarios));
                std::process::exit(1);
            }
        },
        None => data.scenarios[0].clone(),
    };

    if !config.quiet {
        eprintln!(
            "TechSim Simulator: {} x {} month(s) x {} run(s), seed={}",
            scenario.id, config.months, config.runs, config.seed,
        );
    }
    info!(scenario = %scenario.id, months = config.months, runs = config.runs, "simulation started");

    let mut all_stats = Vec::with_capacity(config.runs as usize);
    for run in 0..config.runs {
        let seed = run_seed(config.seed, run);
        let stats = run_simulation(&config, &data, &scenario, seed);
        print_summary(&stats, seed, &scenario, &config);
        all_stats.push(stats);
    }

    if all_stats.len() > 1 {
        print_multi_run_summary(&all_stats);
    }

    Ok(())
}

/// Seed for the `run`-th run. Wraps so any `--seed` works with any `--runs`.
fn run_seed(base: u64, run: u32) -> u64 {
    base.wrapping_add(u64::from(run))
}

fn scenario_ids(scenarios: &[Scenario]) -> String {
    scenarios
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_seed_increments() {
        assert_eq!(run_seed(42, 0), 42);
        assert_eq!(run_seed(42, 3), 45);
    }

    #[test]
    fn test_run_seed_wraps_at_max() {
        assert_eq!(run_seed(u64::MAX, 0), u64::MAX);
        assert_eq!(run_seed(u64::MAX, 1), 0);
        assert_eq!(run_seed(u64::MAX - 1, 3), 1);
    }
}
