// =============================================================================
// INTEGRATION TESTS - SINGLE CYCLE
// fetch -> validate -> parse -> notify on the happy paths
// =============================================================================

use serde_json::json;

use crate::common::{engine, homework, RecordingTransport, ScriptedSource, CHAT_ID, START_CURSOR};
use homework_bot::modules::homework::HomeworkStatus;
use homework_bot::services::monitor::CycleOutcome;

#[tokio::test]
async fn test_empty_list_is_a_no_op() {
    let source = ScriptedSource::always(Ok(json!({"homeworks": [], "current_date": 9999})));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    let outcome = engine.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::NoUpdates);
    assert_eq!(transport.attempts(), 0);
    assert_eq!(engine.cursor(), START_CURSOR);
    assert_eq!(engine.last_message(), "");
}

#[tokio::test]
async fn test_new_status_is_delivered_and_cursor_advances() {
    let source = ScriptedSource::always(Ok(json!({
        "homeworks": [homework("hw1", "approved")],
        "current_date": 1000
    })));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    let outcome = engine.run_cycle().await;

    let delivered = transport.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].contains("hw1"));
    assert!(delivered[0].contains(HomeworkStatus::Approved.verdict()));
    assert_eq!(outcome, CycleOutcome::Delivered(delivered[0].clone()));
    assert_eq!(transport.chat_ids(), vec![CHAT_ID.to_string()]);
    assert_eq!(engine.cursor(), 1000);
    assert_eq!(engine.last_message(), delivered[0]);
    assert_eq!(source.cursors(), vec![START_CURSOR]);
}

#[tokio::test]
async fn test_next_fetch_uses_advanced_cursor() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [homework("hw1", "reviewing")], "current_date": 1000})),
        Ok(json!({"homeworks": [], "current_date": 2000})),
    ]);
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    engine.run_cycle().await;
    engine.run_cycle().await;

    assert_eq!(source.cursors(), vec![START_CURSOR, 1000]);
    assert_eq!(engine.cursor(), 1000);
}

#[tokio::test]
async fn test_missing_current_date_keeps_cursor() {
    let source = ScriptedSource::always(Ok(json!({"homeworks": [homework("hw1", "rejected")]})));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    assert!(matches!(engine.run_cycle().await, CycleOutcome::Delivered(_)));
    assert_eq!(engine.cursor(), START_CURSOR);
}

#[tokio::test]
async fn test_non_integer_current_date_is_ignored() {
    let source = ScriptedSource::always(Ok(json!({
        "homeworks": [homework("hw1", "rejected")],
        "current_date": "yesterday"
    })));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    engine.run_cycle().await;
    assert_eq!(engine.cursor(), START_CURSOR);
}

#[tokio::test]
async fn test_only_first_record_is_reported() {
    let source = ScriptedSource::always(Ok(json!({
        "homeworks": [homework("newest", "reviewing"), homework("older", "approved")],
        "current_date": 1000
    })));
    let transport = RecordingTransport::new();
    let mut engine = engine(&source, &transport);

    engine.run_cycle().await;

    let delivered = transport.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(delivered[0].contains("newest"));
    assert!(!delivered[0].contains("older"));
}

#[tokio::test]
async fn test_every_known_status_reaches_the_chat() {
    for status in HomeworkStatus::ALL {
        let source = ScriptedSource::always(Ok(json!({
            "homeworks": [homework("hw", status.as_str())]
        })));
        let transport = RecordingTransport::new();
        let mut engine = engine(&source, &transport);

        engine.run_cycle().await;

        assert_eq!(
            transport.delivered(),
            vec![format!("Изменился статус проверки работы \"hw\". {}", status.verdict())]
        );
    }
}
