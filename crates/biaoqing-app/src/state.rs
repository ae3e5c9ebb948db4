use std::path::PathBuf;
use std::sync::Arc;

use biaoqing_catalog::JsonCatalogSource;
use biaoqing_config::Config;
use biaoqing_core::catalog::{CatalogRecord, CatalogSource};
use tokio::sync::RwLock;

pub struct AppState {
    pub root: PathBuf,
    pub config: RwLock<Config>,
    catalog: RwLock<Arc<[CatalogRecord]>>,
}

impl AppState {
    pub fn new(root: PathBuf, config: Config) -> anyhow::Result<Self> {
        let source = JsonCatalogSource::new(root.join(&config.storage.catalog_file));
        let records = source.load()?;
        tracing::info!("catalog ready with {} records", records.len());

        Ok(Self {
            root,
            config: RwLock::new(config),
            catalog: RwLock::new(Arc::from(records)),
        })
    }

    /// Snapshot for one search; reloads swap the whole Arc, never mutate.
    pub async fn catalog_snapshot(&self) -> Arc<[CatalogRecord]> {
        self.catalog.read().await.clone()
    }

    pub async fn replace_catalog(&self, records: Vec<CatalogRecord>) {
        *self.catalog.write().await = Arc::from(records);
    }
}
