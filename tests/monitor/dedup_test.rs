// =============================================================================
// INTEGRATION TESTS - DUPLICATE SUPPRESSION
// The chat only hears about a message once, and only after it got through
// =============================================================================

use serde_json::json;

use crate::common::{engine, homework, RecordingTransport, ScriptedSource};
use homework_bot::services::monitor::CycleOutcome;

#[tokio::test]
async fn test_identical_record_is_sent_once() {
    let source = ScriptedSource::always(Ok(json!({
        "homeworks": [homework("hw1", "approved")],
        "current_date": 1000
    })));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    assert!(matches!(engine.run_cycle().await, CycleOutcome::Delivered(_)));
    assert_eq!(engine.run_cycle().await, CycleOutcome::Unchanged);
    assert_eq!(engine.run_cycle().await, CycleOutcome::Unchanged);

    assert_eq!(source.calls(), 3);
    assert_eq!(transport.attempts(), 1);
    assert_eq!(transport.delivered().len(), 1);
}

#[tokio::test]
async fn test_status_change_is_sent_again() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [homework("hw1", "reviewing")], "current_date": 1000})),
        Ok(json!({"homeworks": [homework("hw1", "approved")], "current_date": 2000})),
    ]);
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    engine.run_cycle().await;
    engine.run_cycle().await;

    let delivered = transport.delivered();
    assert_eq!(delivered.len(), 2);
    assert!(delivered[0].contains("ревьюером"));
    assert!(delivered[1].contains("Ура!"));
    assert_eq!(engine.cursor(), 2000);
}

#[tokio::test]
async fn test_failed_delivery_is_retried_next_cycle() {
    let source = ScriptedSource::always(Ok(json!({
        "homeworks": [homework("hw1", "approved")],
        "current_date": 1000
    })));
    let transport = RecordingTransport::new();
    transport.set_failing(true);
    let mut engine = engine(&source, &transport);

    let outcome = engine.run_cycle().await;
    assert!(matches!(outcome, CycleOutcome::DeliveryFailed(_)));
    assert_eq!(engine.last_message(), "");

    transport.set_failing(false);
    let outcome = engine.run_cycle().await;
    assert!(matches!(outcome, CycleOutcome::Delivered(_)));

    assert_eq!(transport.attempts(), 2);
    assert_eq!(transport.delivered().len(), 1);
    assert_eq!(engine.last_message(), transport.delivered()[0]);
}

#[tokio::test]
async fn test_state_tracks_only_delivered_messages() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [homework("hw1", "reviewing")]})),
        Ok(json!({"homeworks": [homework("hw1", "approved")]})),
    ]);
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    engine.run_cycle().await;
    let first = engine.last_message().to_string();

    transport.set_failing(true);
    engine.run_cycle().await;

    assert_eq!(engine.last_message(), first);
}
