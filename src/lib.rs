//! TechSim - Terminal Startup Simulator Library
//!
//! Exposes the company simulation engine and static data loading for the
//! binaries and for testing.

pub mod company;
pub mod core;
pub mod data;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod ui;

pub use company::{Allocation, AllocationArea, Company, CompanyField, FinancialLever, Financials};
pub use core::{monthly_tick, LogEntry, Session, TickEvent, TickResult};
pub use data::{GameConfig, GameData, RandomEvent, Scenario};
pub use engine::{Action, ActionOutcome};
pub use error::{DataError, DataResult};
