//! The periodic driver body: one call per timer interval.
//!
//! `monthly_tick()` processes monthly results and then, with the configured
//! probability, a random event. It returns a [`TickResult`] so the terminal
//! front end and the headless simulator can react without the game logic
//! knowing about either.

use super::session::Session;
use rand::Rng;

/// A single thing that happened during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// Monthly results were applied.
    MonthlyResults {
        month: u32,
        /// Cash change over the month
        cash_delta: f64,
        message: String,
    },

    /// A random event fired after the monthly results.
    RandomEvent { message: String },
}

/// Result of one tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events in the order they were applied.
    pub events: Vec<TickEvent>,
}

impl TickResult {
    pub fn random_event_fired(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TickEvent::RandomEvent { .. }))
    }
}

/// Processes one month.
///
/// # Arguments
/// - `session`: the active game; all writes go through it.
/// - `rng`: any `impl Rng`. Pass `&mut rand::thread_rng()` in production
///   or a seeded `ChaCha8Rng` in tests.
pub fn monthly_tick<R: Rng>(session: &mut Session, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();

    // ── 1. Monthly results ──────────────────────────────────────
    let cash_before = session.company.cash;
    let outcome = session.process_month();
    result.events.push(TickEvent::MonthlyResults {
        month: session.months_elapsed,
        cash_delta: session.company.cash - cash_before,
        message: outcome.message,
    });

    // ── 2. Random event roll ────────────────────────────────────
    let roll: f64 = rng.gen();
    if roll < session.config().random_event_probability {
        if let Some(outcome) = session.trigger_random_event(rng) {
            result.events.push(TickEvent::RandomEvent {
                message: outcome.message,
            });
        }
    }

    result
}
