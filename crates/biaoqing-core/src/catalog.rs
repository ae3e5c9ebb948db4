use std::path::PathBuf;

use serde::Deserialize;

/// One catalog entry describing a labeled image asset.
///
/// `file_name` is unique within a well-formed catalog; records are read-only
/// for the lifetime of a search session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogRecord {
    pub file_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Supplies catalog records from durable storage
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError>;
}

/// Maps a record's `file_name` to an addressable asset path
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, file_name: &str) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog file not readable: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not a valid record array: {0}")]
    Parse(#[from] serde_json::Error),
}
