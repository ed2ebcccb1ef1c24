//! Static game data: tuning constants, starting scenarios and the random
//! event table.

pub mod config;
pub mod events;
pub mod loader;
pub mod scenario;

pub use config::GameConfig;
pub use events::{Effect, RandomEvent};
pub use loader::GameData;
pub use scenario::{CustomScenarioDraft, Scenario};
