use std::sync::Arc;

use biaoqing_catalog::DirAssetResolver;
use biaoqing_core::matcher::MatchEngine;
use biaoqing_lang_chinese::ChineseConverter;
use biaoqing_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod query_input;
pub mod reload_catalog;

use query_input::handle_query_input;
use reload_catalog::handle_catalog_reload;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let engine = {
        let config = state.config.read().await;
        let images_dir = state.root.join(&config.storage.images_dir);
        MatchEngine::new(
            Arc::new(ChineseConverter::new()),
            Arc::new(DirAssetResolver::new(images_dir)),
        )
    };

    tracing::info!("event loop ready, waiting for queries");
    loop {
        let event = input_rx.recv().await?;
        handle_event(&state, &engine, &app_to_ui_tx, event).await?;
    }
}

async fn handle_event(
    state: &Arc<AppState>,
    engine: &MatchEngine,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {}
        AppEvent::QueryInput { text, source } => {
            tracing::debug!(?source, "query received: {}", text.trim());
            handle_query_input(state, engine, &text, app_to_ui_tx).await?;
        }
        AppEvent::ReloadCatalog => {
            handle_catalog_reload(state).await;
        }
        AppEvent::ShowResults(_) | AppEvent::StatusUpdate { .. } => {
            // Presenter-facing events, nothing to do here
        }
    }

    Ok(())
}
