use std::sync::Arc;
use std::time::Duration;

use biaoqing_lang_chinese::contains_chinese;
use biaoqing_types::{AppEvent, TextSource};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Clipboard watcher: new Han text becomes a query event.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let interval = {
        let config = state.config.read().await;
        Duration::from_millis(config.watch_interval_ms)
    };

    tracing::info!("starting clipboard watcher");

    tokio::select! {
        result = biaoqing_io::clipboard::watch_clipboard(interval, move |text| {
            if !contains_chinese(&text) {
                return;
            }
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let event = AppEvent::QueryInput {
                    text,
                    source: TextSource::Clipboard,
                };
                if let Err(e) = tx.send(event).await {
                    tracing::error!("failed to send clipboard query: {e}");
                }
            });
        }) => {
            if let Err(e) = result {
                tracing::error!("clipboard watcher error: {e}");
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("clipboard watcher stopping");
        }
    }

    Ok(())
}
