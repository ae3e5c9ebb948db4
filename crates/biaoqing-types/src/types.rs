use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    QueryInput {
        text: String,
        source: TextSource,
    },
    ShowResults(Vec<DisplayMeme>),
    ReloadCatalog,
    StatusUpdate {
        status: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    Clipboard,
    Manual,
}

/// One ranked entry as handed to the presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayMeme {
    pub label: String,
    pub asset: PathBuf,
    pub score: u32,
    /// Fraction of query characters found in the name fields
    pub name_match: f32,
}
