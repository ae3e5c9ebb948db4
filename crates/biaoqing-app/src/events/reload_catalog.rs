use std::sync::Arc;

use biaoqing_catalog::JsonCatalogSource;
use biaoqing_core::catalog::CatalogSource;

use crate::state::AppState;

/// Reload the catalog from disk and swap it in atomically. A failed reload
/// keeps the current catalog.
pub async fn handle_catalog_reload(state: &Arc<AppState>) {
    let path = {
        let config = state.config.read().await;
        state.root.join(&config.storage.catalog_file)
    };

    match JsonCatalogSource::new(path).load() {
        Ok(records) => {
            tracing::info!("catalog reloaded with {} records", records.len());
            state.replace_catalog(records).await;
        }
        Err(e) => tracing::error!("catalog reload failed: {e}"),
    }
}
