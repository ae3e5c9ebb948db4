use std::sync::Arc;

use biaoqing_types::{AppEvent, DisplayMeme};
use kanal::AsyncReceiver;

use crate::state::AppState;

/// Terminal presenter standing in for the popup window. Top-N truncation is
/// presentation policy and happens here, not in the engine.
pub async fn presenter_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    state: Arc<AppState>,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdout);

    loop {
        let event = app_to_ui_rx.recv().await?;
        match event {
            AppEvent::ShowResults(memes) => {
                let max_results = {
                    let config = state.config.read().await;
                    config.ui.max_results
                };
                show_results(&memes, max_results, interactive)?;
            }
            AppEvent::StatusUpdate { status } => {
                tracing::info!("{status}");
            }
            _ => {}
        }
    }
}

/// The slice of results the popup actually shows.
fn visible(memes: &[DisplayMeme], max_results: usize) -> &[DisplayMeme] {
    &memes[..memes.len().min(max_results)]
}

fn show_results(memes: &[DisplayMeme], max_results: usize, interactive: bool) -> anyhow::Result<()> {
    for (rank, meme) in visible(memes, max_results).iter().enumerate() {
        if interactive {
            println!(
                "{:>2}. {}  [{}]  {}",
                rank + 1,
                meme.label,
                meme.score,
                meme.asset.display()
            );
        } else {
            println!("{}", serde_json::to_string(meme)?);
        }
    }

    Ok(())
}
