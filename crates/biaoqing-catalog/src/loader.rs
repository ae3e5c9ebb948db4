use std::path::{Path, PathBuf};

use biaoqing_core::catalog::{CatalogError, CatalogRecord, CatalogSource};

/// Catalog source backed by a JSON record array on disk.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    /// Load all records. A missing file is an empty catalog, not an error.
    fn load(&self) -> Result<Vec<CatalogRecord>, CatalogError> {
        if !self.path.exists() {
            tracing::warn!("catalog file missing: {}", self.path.display());
            return Ok(Vec::new());
        }

        let data = std::fs::read_to_string(&self.path)?;
        let records: Vec<CatalogRecord> = serde_json::from_str(&data)?;
        tracing::info!(
            "loaded {} catalog records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}
