use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use biaoqing_types::{AppEvent, TextSource};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::timeout;

use crate::bootstrap;
use crate::events::event_loop;
use crate::state::AppState;

fn write_catalog(root: &Path, json: &str) {
    fs::write(root.join("data/image_map.json"), json).expect("write catalog");
}

fn spawn_pipeline(root: &Path) -> (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>) {
    let config = bootstrap::prepare(root).expect("prepare");
    let state = Arc::new(AppState::new(root.to_path_buf(), config).expect("state"));

    let (input_tx, input_rx) = kanal::bounded_async::<AppEvent>(16);
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(16);
    tokio::spawn(event_loop(state, input_rx, ui_tx));

    (input_tx, ui_rx)
}

#[tokio::test]
async fn query_event_produces_ranked_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    bootstrap::prepare(dir.path()).expect("prepare");
    write_catalog(
        dir.path(),
        r#"[
            {"file_name": "kaixin.png", "name": "开心"},
            {"file_name": "shangxin.png", "name": "伤心"}
        ]"#,
    );

    let (input_tx, ui_rx) = spawn_pipeline(dir.path());
    input_tx
        .send(AppEvent::QueryInput {
            text: "开心".to_string(),
            source: TextSource::Manual,
        })
        .await
        .expect("send query");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");

    match event {
        AppEvent::ShowResults(memes) => {
            assert_eq!(memes.len(), 1);
            assert_eq!(memes[0].label, "开心");
            assert_eq!(memes[0].score, 115);
            assert!(memes[0].asset.ends_with("images/kaixin.png"));
        }
        other => panic!("expected ShowResults, got {other:?}"),
    }
}

#[tokio::test]
async fn traditional_clipboard_query_hits_simplified_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    bootstrap::prepare(dir.path()).expect("prepare");
    write_catalog(
        dir.path(),
        r#"[{"file_name": "shangxin.png", "name": "伤心"}]"#,
    );

    let (input_tx, ui_rx) = spawn_pipeline(dir.path());
    input_tx
        .send(AppEvent::QueryInput {
            text: "傷心".to_string(),
            source: TextSource::Clipboard,
        })
        .await
        .expect("send query");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");

    match event {
        AppEvent::ShowResults(memes) => {
            assert_eq!(memes.len(), 1);
            assert!(memes[0].score >= 100);
        }
        other => panic!("expected ShowResults, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_query_reports_status_instead_of_results() {
    let dir = tempfile::tempdir().expect("tempdir");
    bootstrap::prepare(dir.path()).expect("prepare");
    write_catalog(dir.path(), r#"[{"file_name": "a.png", "name": "开心"}]"#);

    let (input_tx, ui_rx) = spawn_pipeline(dir.path());
    input_tx
        .send(AppEvent::QueryInput {
            text: "   ".to_string(),
            source: TextSource::Manual,
        })
        .await
        .expect("send query");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");

    assert!(matches!(event, AppEvent::StatusUpdate { .. }));
}

#[tokio::test]
async fn engine_results_cross_the_channel_untruncated() {
    let dir = tempfile::tempdir().expect("tempdir");
    bootstrap::prepare(dir.path()).expect("prepare");

    let records: Vec<String> = (0..7)
        .map(|i| format!(r#"{{"file_name": "{i}.png", "name": "开心{i}"}}"#))
        .collect();
    write_catalog(dir.path(), &format!("[{}]", records.join(",")));

    let (input_tx, ui_rx) = spawn_pipeline(dir.path());
    input_tx
        .send(AppEvent::QueryInput {
            text: "开心".to_string(),
            source: TextSource::Manual,
        })
        .await
        .expect("send query");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");

    match event {
        // Top-N truncation belongs to the presenter, not the pipeline
        AppEvent::ShowResults(memes) => assert_eq!(memes.len(), 7),
        other => panic!("expected ShowResults, got {other:?}"),
    }
}

#[tokio::test]
async fn reload_event_swaps_in_the_new_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    bootstrap::prepare(dir.path()).expect("prepare");

    let (input_tx, ui_rx) = spawn_pipeline(dir.path());

    // Empty catalog: nothing to match
    input_tx
        .send(AppEvent::QueryInput {
            text: "开心".to_string(),
            source: TextSource::Manual,
        })
        .await
        .expect("send query");
    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::StatusUpdate { .. }));

    // Records appear on disk only after a reload event
    write_catalog(dir.path(), r#"[{"file_name": "a.png", "name": "开心"}]"#);
    input_tx
        .send(AppEvent::ReloadCatalog)
        .await
        .expect("send reload");
    input_tx
        .send(AppEvent::QueryInput {
            text: "开心".to_string(),
            source: TextSource::Manual,
        })
        .await
        .expect("send query");

    let event = timeout(Duration::from_secs(2), ui_rx.recv())
        .await
        .expect("no event within timeout")
        .expect("channel closed");
    match event {
        AppEvent::ShowResults(memes) => assert_eq!(memes.len(), 1),
        other => panic!("expected ShowResults, got {other:?}"),
    }
}
