use std::sync::Arc;

use biaoqing_core::matcher::MatchEngine;
use biaoqing_types::{AppEvent, DisplayMeme};
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_query_input(
    state: &Arc<AppState>,
    engine: &MatchEngine,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let threshold = {
        let config = state.config.read().await;
        config.search.score_threshold
    };
    let catalog = state.catalog_snapshot().await;

    let results = engine.search(text, &catalog, threshold);
    tracing::info!("{} matches for '{}'", results.len(), text.trim());

    if results.is_empty() {
        let _ = app_to_ui_tx
            .send(AppEvent::StatusUpdate {
                status: format!("no matches for '{}'", text.trim()),
            })
            .await;
        return Ok(());
    }

    for (rank, result) in results.iter().take(3).enumerate() {
        tracing::debug!(
            "{}. {} (score {}, name match {:.0}%)",
            rank + 1,
            result.label,
            result.score,
            result.detail.name_match * 100.0
        );
    }

    let memes = results
        .into_iter()
        .map(|result| DisplayMeme {
            label: result.label,
            asset: result.asset,
            score: result.score,
            name_match: result.detail.name_match,
        })
        .collect();

    app_to_ui_tx.send(AppEvent::ShowResults(memes)).await?;
    Ok(())
}
