use serde::{Deserialize, Serialize};

fn default_score_threshold() -> u32 {
    30
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum score a candidate needs to appear in results
    #[serde(default = "default_score_threshold")]
    pub score_threshold: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            score_threshold: default_score_threshold(),
        }
    }
}
