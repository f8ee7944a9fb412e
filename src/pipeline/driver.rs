// Dictionary pipeline driver
//
// Runs the fetch -> load -> prepare state machine as an explicit loop and
// exposes remove and search once the pipeline is ready. Load, sectioning and
// search run on the blocking pool. Searches are last-write-wins: a result is
// only published if no newer query or removal happened while it ran.

use super::state::{PipelineState, PipelineStateMachine};
use crate::config::{ConfigError, DictionaryConfig};
use crate::dictionary::{self, DictionarySnapshot, DictionaryStore, LoadError};
use crate::events::{
    current_timestamp, DictionaryEventEmitter, SnapshotUpdatedPayload, StateChangedPayload,
};
use crate::fetch::{fetch_word_list, FetchError, HttpWordListSource, WordListSource};
use crate::{debug, error, info};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Error types for pipeline operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),
    /// Load succeeded but produced no usable words
    #[error("Word list contains no words")]
    EmptyData,
    /// Remove or search attempted before the pipeline became ready
    #[error("Dictionary is not ready (state: {0})")]
    NotReady(String),
    /// Background task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

/// Owns the dictionary state and drives it through the pipeline
pub struct DictionaryPipeline<S, E> {
    config: DictionaryConfig,
    local_path: PathBuf,
    source: S,
    emitter: Arc<E>,
    machine: Mutex<PipelineStateMachine>,
    store: Arc<Mutex<DictionaryStore>>,
    /// Bumped under the store lock by every query change and removal
    generation: Arc<AtomicU64>,
}

impl<E: DictionaryEventEmitter> DictionaryPipeline<HttpWordListSource, E> {
    /// Create a pipeline fetching from the configured URL over HTTP
    pub fn with_http_source(config: DictionaryConfig, emitter: Arc<E>) -> Result<Self, PipelineError> {
        let source = HttpWordListSource::new(config.source_url.clone());
        Self::new(config, source, emitter)
    }
}

impl<S: WordListSource, E: DictionaryEventEmitter> DictionaryPipeline<S, E> {
    /// Create a pipeline; the initial state depends on whether the local file exists
    pub fn new(config: DictionaryConfig, source: S, emitter: Arc<E>) -> Result<Self, PipelineError> {
        let local_path = config.local_path()?;
        let initial = PipelineState::initial(local_path.exists());
        debug!("Pipeline for {:?} starts in {:?}", local_path, initial);

        Ok(Self {
            store: Arc::new(Mutex::new(DictionaryStore::from_config(&config))),
            config,
            local_path,
            source,
            emitter,
            machine: Mutex::new(PipelineStateMachine::new(initial)),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn state(&self) -> PipelineState {
        self.machine.lock().get_state().clone()
    }

    /// Currently published snapshot
    pub fn snapshot(&self) -> Arc<DictionarySnapshot> {
        self.store.lock().snapshot()
    }

    /// Version of the currently published snapshot
    pub fn version(&self) -> u64 {
        self.store.lock().version()
    }

    /// Copy-on-read handle to the full word list
    pub fn words(&self) -> Arc<Vec<String>> {
        self.store.lock().words_handle()
    }

    pub fn query(&self) -> String {
        self.store.lock().query().to_string()
    }

    /// Drive the state machine until it reaches Ready or Failed
    ///
    /// Calling this again after a terminal state returns that state unchanged.
    pub async fn run(&self) -> PipelineState {
        let initial = self.state();
        if !initial.is_terminal() {
            self.emit_state(&initial);
        }
        let mut loaded: Option<Vec<String>> = None;

        loop {
            let state = self.state();
            let outcome = match state {
                PipelineState::Fetching => self.fetch().await,
                PipelineState::Loading => match self.load().await {
                    Ok(words) => {
                        loaded = Some(words);
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                PipelineState::Preparing => self.prepare(loaded.take()).await,
                PipelineState::Ready | PipelineState::Failed { .. } => return state,
            };

            let next = match outcome {
                Ok(()) => Self::next_state(&state),
                Err(e) => {
                    error!("Pipeline failed while {}: {}", state.name(), e);
                    state.failure()
                }
            };

            let advanced = match next {
                Some(next) => self.advance(next),
                None => false,
            };
            if !advanced {
                return self.state();
            }
        }
    }

    /// Remove a word (lowercased) and re-derive the snapshot.
    ///
    /// Returns whether a word was removed; absent words are not an error.
    pub async fn remove_word(&self, word: &str) -> Result<bool, PipelineError> {
        self.ensure_ready()?;

        let store = self.store.clone();
        let generation = self.generation.clone();
        let word = word.to_string();
        let removed = tokio::task::spawn_blocking(move || {
            let mut store = store.lock();
            if !store.remove_word(&word) {
                return None;
            }
            // Invalidate searches started before the removal
            generation.fetch_add(1, Ordering::SeqCst);
            Some((store.snapshot(), store.version()))
        })
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?;

        match removed {
            Some((snapshot, version)) => {
                self.emit_snapshot(&snapshot, version);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the live search query and publish its result.
    ///
    /// An empty query restores the sectioned view. Returns `None` when a newer
    /// query or removal superseded this one before it finished.
    pub async fn set_query(&self, query: &str) -> Result<Option<Arc<DictionarySnapshot>>, PipelineError> {
        self.ensure_ready()?;

        let (generation, words) = {
            let mut store = self.store.lock();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            match store.begin_search(query) {
                Some(words) => (generation, words),
                None => {
                    let snapshot = store.snapshot();
                    let version = store.version();
                    drop(store);
                    self.emit_snapshot(&snapshot, version);
                    return Ok(Some(snapshot));
                }
            }
        };

        let needle = query.to_string();
        let result = tokio::task::spawn_blocking(move || dictionary::search(&words, &needle))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))?;

        let mut store = self.store.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding stale search for '{}'", query);
            return Ok(None);
        }
        let snapshot = store.publish_search(result);
        let version = store.version();
        drop(store);

        self.emit_snapshot(&snapshot, version);
        Ok(Some(snapshot))
    }

    fn ensure_ready(&self) -> Result<(), PipelineError> {
        match self.state() {
            PipelineState::Ready => Ok(()),
            other => Err(PipelineError::NotReady(other.name().to_string())),
        }
    }

    fn next_state(state: &PipelineState) -> Option<PipelineState> {
        match state {
            PipelineState::Fetching => Some(PipelineState::Loading),
            PipelineState::Loading => Some(PipelineState::Preparing),
            PipelineState::Preparing => Some(PipelineState::Ready),
            PipelineState::Ready | PipelineState::Failed { .. } => None,
        }
    }

    async fn fetch(&self) -> Result<(), PipelineError> {
        let emitter: &dyn DictionaryEventEmitter = self.emitter.as_ref();
        fetch_word_list(&self.source, &self.local_path, emitter).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<String>, PipelineError> {
        let path = self.local_path.clone();
        let words = tokio::task::spawn_blocking(move || dictionary::load(&path))
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))??;
        Ok(words)
    }

    async fn prepare(&self, words: Option<Vec<String>>) -> Result<(), PipelineError> {
        let words = words
            .filter(|words| words.iter().any(|w| !w.is_empty()))
            .ok_or(PipelineError::EmptyData)?;

        let store = self.store.clone();
        let (snapshot, version) = tokio::task::spawn_blocking(move || {
            let mut store = store.lock();
            let snapshot = store.replace_words(words);
            (snapshot, store.version())
        })
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?;

        self.emit_snapshot(&snapshot, version);
        Ok(())
    }

    /// Apply a transition and notify; false if the machine rejected it
    fn advance(&self, next: PipelineState) -> bool {
        let result = self.machine.lock().transition_to(next.clone());
        if let Err(e) = result {
            error!("{}", e);
            return false;
        }

        match next.reason() {
            Some(reason) => error!("Pipeline state -> {} ({})", next.name(), reason),
            None => info!("Pipeline state -> {}", next.name()),
        }
        self.emit_state(&next);
        true
    }

    fn emit_state(&self, state: &PipelineState) {
        self.emitter.emit_state_changed(StateChangedPayload {
            state: state.name().to_string(),
            reason: state.reason().map(str::to_string),
            timestamp: current_timestamp(),
        });
    }

    fn emit_snapshot(&self, snapshot: &DictionarySnapshot, version: u64) {
        self.emitter.emit_snapshot_updated(SnapshotUpdatedPayload {
            version,
            section_count: snapshot.sections.len(),
            word_count: snapshot.word_count(),
            is_search: snapshot.is_search_result(),
        });
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
