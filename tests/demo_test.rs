//! デモモードのテスト
//!
//! 時間を止めて2秒の疑似遅延を検証する

use neuroscan::client::{simulate, Client};
use neuroscan::diagnose;
use neuroscan_common::demo::is_demo_outcome;
use neuroscan_common::{Mode, RenderState, ResultView, SelectedFile};
use std::time::Duration;
use tempfile::tempdir;

/// デモはネットワークを使わない（到達不能なエンドポイントでも成功する）
const UNUSED_ENDPOINT: &str = "http://127.0.0.1:9/predict";

#[tokio::test(start_paused = true)]
async fn test_simulate_waits_two_seconds() {
    let start = tokio::time::Instant::now();
    let result = simulate().await;
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(is_demo_outcome(&result));
}

#[tokio::test(start_paused = true)]
async fn test_demo_always_one_of_canned_outcomes() {
    let client = Client::new(UNUSED_ENDPOINT, None).unwrap();
    let file = SelectedFile {
        name: "scan.png".to_string(),
        mime_type: "image/png".to_string(),
        handle: Vec::new(),
    };

    for _ in 0..20 {
        let result = client.classify(&file, Mode::Demo).await.expect("デモは失敗しない");
        assert!(is_demo_outcome(&result), "想定外の結果: {:?}", result);
    }
}

/// scan.png をデモで診断 → 既定結果のいずれか
#[tokio::test(start_paused = true)]
async fn test_diagnose_demo_scenario() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scan.png");
    std::fs::write(&path, b"\x89PNG").unwrap();

    let client = Client::new(UNUSED_ENDPOINT, None).unwrap();
    let session = diagnose::run(&client, &path, Mode::Demo).await.unwrap();

    assert!(session.preview().is_some());
    match session.render_state() {
        RenderState::Result { result, mode } => {
            assert!(is_demo_outcome(result));
            assert_eq!(*mode, Mode::Demo);
        }
        other => panic!("unexpected state: {:?}", other),
    }
    let ResultView::Result(card) = session.view() else {
        panic!("結果カードになるはず");
    };
    assert_eq!(card.processing_time, "Simulated");
}
