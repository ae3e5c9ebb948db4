use serde::{Deserialize, Serialize};

fn default_max_results() -> usize {
    5
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// How many ranked results the presenter shows
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}
