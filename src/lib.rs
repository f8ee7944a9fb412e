// Word list pipeline: fetch a remote word list, keep a local copy, split it
// into alphabet sections and serve live search and removal to a display layer.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod dictionary;
pub mod events;
pub mod fetch;
pub mod pipeline;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{ConfigError, DictionaryConfig, DEFAULT_SOURCE_URL};
pub use dictionary::{
    load, search, section, Alphabet, DictionarySnapshot, DictionaryStore, HeaderMatch, LoadError,
    Section,
};
pub use events::{DictionaryEventEmitter, LogEventEmitter};
pub use fetch::{fetch_word_list, FetchError, HttpWordListSource, WordListSource};
pub use pipeline::{DictionaryPipeline, PipelineError, PipelineState};
