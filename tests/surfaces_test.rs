//! Cross-surface behavior: each surface owns its state and its pending
//! task independently of the others.

use std::sync::Arc;
use std::time::Duration;

use farmiq::responder::scripted::{ScriptedResponder, WEATHER_REPLY};
use farmiq::session::chat::ChatSession;
use farmiq::session::recommend::{FarmDetails, RecommendationSession};
use farmiq::session::scan::ScanSession;
use farmiq::task::Phase;
use farmiq::transcript::sqlite::SqliteTranscript;

#[tokio::test(start_paused = true)]
async fn surfaces_complete_independently() {
    let chat = ChatSession::with_transcript(
        Arc::new(SqliteTranscript::new().unwrap()),
        Arc::new(ScriptedResponder::new()),
        Duration::from_millis(1500),
    )
    .await
    .unwrap();
    let scans = ScanSession::with_delay(Duration::from_millis(2500));

    chat.send("weather tomorrow?").await.unwrap();
    assert!(scans.analyze("leaf.jpg"));
    assert_eq!(chat.phase(), Phase::Pending);
    assert_eq!(scans.phase(), Phase::Pending);

    // The chat timer elapses first; the scan is still running.
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert_eq!(chat.phase(), Phase::Completed);
    assert_eq!(scans.phase(), Phase::Pending);
    assert_eq!(chat.wait_reply().await, WEATHER_REPLY);

    let analysis = scans.wait_analysis().await;
    assert_eq!(analysis.crop, "Tomato");
    assert_eq!(scans.history().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn scan_history_is_most_recent_first() {
    let scans = ScanSession::with_delay(Duration::from_millis(10));
    scans.analyze("first.jpg");
    scans.wait_analysis().await;
    scans.analyze("second.jpg");
    scans.wait_analysis().await;

    let history = scans.history();
    assert_eq!(history.len(), 5);
    // Newest ids at the head, seeded samples at the tail.
    assert_eq!(history[0].id, 5);
    assert_eq!(history[1].id, 4);
    assert_eq!(history[4].id, 3);
}

#[tokio::test(start_paused = true)]
async fn recommendation_resubmission_after_reset() {
    let session = RecommendationSession::with_delay(Duration::from_millis(100));
    let details = FarmDetails {
        location: "Pune, Maharashtra".to_string(),
        ..FarmDetails::default()
    };

    assert!(session.request(&details));
    assert!(!session.request(&details), "second submit while pending");
    let first = session.wait_recommendations().await;
    assert_eq!(first.len(), 3);

    assert!(session.reset());
    assert_eq!(session.phase(), Phase::Idle);

    assert!(session.request(&details));
    let second = session.wait_recommendations().await;
    assert_eq!(first, second, "the simulated backend is deterministic");
}
