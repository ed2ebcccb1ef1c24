//! Session state, the monthly tick, and shared constants.

pub mod constants;
pub mod format;
pub mod session;
pub mod tick;

pub use constants::*;
pub use session::{LogEntry, Session};
pub use tick::{monthly_tick, TickEvent, TickResult};
