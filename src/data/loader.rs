//! Loading of the three static data files.

use super::{GameConfig, RandomEvent, Scenario};
use crate::core::constants::{CONFIG_FILE, EVENTS_FILE, SCENARIOS_FILE};
use crate::error::{DataError, DataResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EMBEDDED_SCENARIOS: &str = include_str!("../../assets/scenarios.json");
const EMBEDDED_EVENTS: &str = include_str!("../../assets/events.json");
const EMBEDDED_CONFIG: &str = include_str!("../../assets/game-config.json");

/// Everything the simulation needs from disk.
#[derive(Debug, Clone)]
pub struct GameData {
    pub scenarios: Vec<Scenario>,
    pub random_events: Vec<RandomEvent>,
    pub config: GameConfig,
}

fn parse<T: DeserializeOwned>(path: &Path, json: &str) -> DataResult<T> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_and_parse<T: DeserializeOwned>(path: PathBuf) -> DataResult<T> {
    let json = fs::read_to_string(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "read data file");
    parse(&path, &json)
}

impl GameData {
    /// Data compiled into the binary from `assets/`.
    pub fn embedded() -> DataResult<Self> {
        let base = Path::new("<embedded>");
        Self::from_parts(
            parse(&base.join(SCENARIOS_FILE), EMBEDDED_SCENARIOS)?,
            parse(&base.join(EVENTS_FILE), EMBEDDED_EVENTS)?,
            parse(&base.join(CONFIG_FILE), EMBEDDED_CONFIG)?,
        )
    }

    /// Loads `scenarios.json`, `events.json` and `game-config.json` from `dir`.
    pub fn load_from_dir(dir: &Path) -> DataResult<Self> {
        let data = Self::from_parts(
            read_and_parse(dir.join(SCENARIOS_FILE))?,
            read_and_parse(dir.join(EVENTS_FILE))?,
            read_and_parse(dir.join(CONFIG_FILE))?,
        )?;
        info!(
            dir = %dir.display(),
            scenarios = data.scenarios.len(),
            events = data.random_events.len(),
            "loaded game data"
        );
        Ok(data)
    }

    /// Loads from `dir` when given, otherwise uses the embedded data.
    pub fn load(dir: Option<&Path>) -> DataResult<Self> {
        match dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::embedded(),
        }
    }

    fn from_parts(
        scenarios: Vec<Scenario>,
        random_events: Vec<RandomEvent>,
        config: GameConfig,
    ) -> DataResult<Self> {
        if scenarios.is_empty() {
            return Err(DataError::Invalid(
                "scenario list is empty".to_string(),
            ));
        }
        config.validate()?;
        Ok(Self {
            scenarios,
            random_events,
            config,
        })
    }

    pub fn find_scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}
