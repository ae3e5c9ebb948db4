use std::time::Duration;

use arboard::Clipboard;
use tokio::time;

/// Poll the system clipboard and hand every new non-blank text to `on_text`.
///
/// Repeated reads of the same content fire only once. Runs until the
/// surrounding task is cancelled or dropped.
pub async fn watch_clipboard<F>(interval: Duration, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut last_text = String::new();

    let mut ticker = time::interval(interval);

    loop {
        ticker.tick().await;
        if let Ok(text) = clipboard.get_text()
            && !text.trim().is_empty()
            && text != last_text
        {
            last_text = text.clone();
            on_text(text);
        }
    }
}
