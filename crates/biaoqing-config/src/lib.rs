use std::env;

use serde::{Deserialize, Serialize};

use self::search::SearchConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod search;
pub mod storage;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,

    /// Clipboard poll cadence in milliseconds
    pub watch_interval_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let watch_interval_ms = env::var("WATCH_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500); // 500ms default

        Config {
            search: SearchConfig::default(),
            ui: UiConfig::default(),
            storage: StorageConfig::default(),
            watch_interval_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
