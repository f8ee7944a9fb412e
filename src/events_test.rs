use super::*;
use std::sync::{Arc, Mutex};

/// Mock emitter that records all emitted events for testing
#[derive(Default)]
pub struct MockEventEmitter {
    pub state_events: Arc<Mutex<Vec<StateChangedPayload>>>,
    pub snapshot_events: Arc<Mutex<Vec<SnapshotUpdatedPayload>>>,
    pub progress_events: Arc<Mutex<Vec<FetchProgressPayload>>>,
}

impl MockEventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// State names in emission order
    pub fn states(&self) -> Vec<String> {
        self.state_events
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.state.clone())
            .collect()
    }
}

impl DictionaryEventEmitter for MockEventEmitter {
    fn emit_state_changed(&self, payload: StateChangedPayload) {
        self.state_events.lock().unwrap().push(payload);
    }

    fn emit_snapshot_updated(&self, payload: SnapshotUpdatedPayload) {
        self.snapshot_events.lock().unwrap().push(payload);
    }

    fn emit_fetch_progress(&self, payload: FetchProgressPayload) {
        self.progress_events.lock().unwrap().push(payload);
    }
}

#[test]
fn test_current_timestamp_is_iso8601() {
    let timestamp = current_timestamp();
    assert!(timestamp.contains("T"));
    assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
}

// Verify serde camelCase rename works (smoke test for all payloads)
#[test]
fn test_serde_camel_case_rename() {
    let payload = SnapshotUpdatedPayload {
        version: 3,
        section_count: 25,
        word_count: 1000,
        is_search: false,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("sectionCount"));
    assert!(json.contains("wordCount"));
    assert!(json.contains("isSearch"));
    assert!(!json.contains("section_count"));

    let progress = FetchProgressPayload {
        bytes_downloaded: 10,
        total_bytes: None,
    };
    let json = serde_json::to_string(&progress).unwrap();
    assert_eq!(json, r#"{"bytesDownloaded":10,"totalBytes":null}"#);
}

#[test]
fn test_mock_emitter_records_events() {
    let emitter = MockEventEmitter::new();

    emitter.emit_state_changed(StateChangedPayload {
        state: "loading".to_string(),
        reason: None,
        timestamp: current_timestamp(),
    });
    emitter.emit_state_changed(StateChangedPayload {
        state: "failed".to_string(),
        reason: Some("Could not read data".to_string()),
        timestamp: current_timestamp(),
    });
    emitter.emit_fetch_progress(FetchProgressPayload {
        bytes_downloaded: 5,
        total_bytes: Some(5),
    });

    assert_eq!(emitter.states(), vec!["loading", "failed"]);
    assert_eq!(emitter.progress_events.lock().unwrap().len(), 1);
    assert!(emitter.snapshot_events.lock().unwrap().is_empty());
}

#[test]
fn test_log_emitter_accepts_all_events() {
    let emitter = LogEventEmitter;
    emitter.emit_snapshot_updated(SnapshotUpdatedPayload {
        version: 1,
        section_count: 1,
        word_count: 0,
        is_search: true,
    });
    emitter.emit_fetch_progress(FetchProgressPayload {
        bytes_downloaded: 0,
        total_bytes: Some(0),
    });
}
