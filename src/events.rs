// Dictionary events for the display layer
// Defines event payloads and the emission trait for testability

use serde::Serialize;

/// Event names as constants for consistency
pub mod event_names {
    pub const PIPELINE_STATE_CHANGED: &str = "pipeline_state_changed";
    pub const SNAPSHOT_UPDATED: &str = "snapshot_updated";
    pub const FETCH_PROGRESS: &str = "fetch_progress";
}

/// Payload for pipeline_state_changed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateChangedPayload {
    /// New state name: "fetching", "loading", "preparing", "ready" or "failed"
    pub state: String,
    /// User-facing failure message, present only for "failed"
    pub reason: Option<String>,
    /// ISO 8601 timestamp of the transition
    pub timestamp: String,
}

/// Payload for snapshot_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUpdatedPayload {
    /// Store version the snapshot was published under
    pub version: u64,
    /// Number of sections in the snapshot
    pub section_count: usize,
    /// Number of words shown across all sections
    pub word_count: usize,
    /// Whether the snapshot is a search result
    pub is_search: bool,
}

/// Payload for fetch_progress event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchProgressPayload {
    pub bytes_downloaded: u64,
    /// Content length if the server sent one
    pub total_bytes: Option<u64>,
}

/// Trait for notifying the display layer
/// Allows mocking in tests while an embedding supplies its own UI bridge
pub trait DictionaryEventEmitter: Send + Sync {
    fn emit_state_changed(&self, payload: StateChangedPayload);

    fn emit_snapshot_updated(&self, payload: SnapshotUpdatedPayload);

    fn emit_fetch_progress(&self, payload: FetchProgressPayload);
}

/// Emitter for headless use that writes every event to the log as JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventEmitter;

impl LogEventEmitter {
    fn log_event<T: Serialize>(event: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => crate::debug!("{} {}", event, json),
            Err(e) => crate::warn!("Failed to serialize '{}' payload: {}", event, e),
        }
    }
}

impl DictionaryEventEmitter for LogEventEmitter {
    fn emit_state_changed(&self, payload: StateChangedPayload) {
        Self::log_event(event_names::PIPELINE_STATE_CHANGED, &payload);
    }

    fn emit_snapshot_updated(&self, payload: SnapshotUpdatedPayload) {
        Self::log_event(event_names::SNAPSHOT_UPDATED, &payload);
    }

    fn emit_fetch_progress(&self, payload: FetchProgressPayload) {
        Self::log_event(event_names::FETCH_PROGRESS, &payload);
    }
}

/// Get current timestamp in ISO 8601 format
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
