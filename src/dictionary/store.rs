// Dictionary store - authoritative word list, active query and published snapshot
//
// The published snapshot is never patched in place. Every change computes a
// new snapshot and swaps the Arc, bumping the version, so readers always see
// a complete view.

use super::search::search;
use super::sectioner::section;
use super::types::{Alphabet, DictionarySnapshot, HeaderMatch};
use crate::config::DictionaryConfig;
use std::sync::Arc;

/// Store for the loaded word list and its derived views
#[derive(Debug)]
pub struct DictionaryStore {
    /// All loaded words in file order, duplicates included
    words: Arc<Vec<String>>,
    /// Active search query, empty when none
    query: String,
    alphabet: Alphabet,
    header_match: HeaderMatch,
    /// Last sectioner output for the current words
    sectioned: Arc<DictionarySnapshot>,
    /// What the display layer should show
    current: Arc<DictionarySnapshot>,
    /// Incremented on every publish
    version: u64,
}

impl DictionaryStore {
    /// Create an empty store
    pub fn new(alphabet: Alphabet, header_match: HeaderMatch) -> Self {
        let sectioned = Arc::new(section(&[], &alphabet, header_match));
        Self {
            words: Arc::new(Vec::new()),
            query: String::new(),
            alphabet,
            header_match,
            current: sectioned.clone(),
            sectioned,
            version: 0,
        }
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.alphabet.clone(), config.header_match)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Shared handle to the word list for searching outside the store lock
    pub fn words_handle(&self) -> Arc<Vec<String>> {
        self.words.clone()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> Arc<DictionarySnapshot> {
        self.current.clone()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the whole word list, as after a fresh load
    pub fn replace_words(&mut self, words: Vec<String>) -> Arc<DictionarySnapshot> {
        self.words = Arc::new(words);
        self.resection();
        self.rederive()
    }

    /// Remove the first entry equal to the lowercased `word`.
    ///
    /// Returns false and leaves everything untouched when the word is absent.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let target = word.to_lowercase();
        let Some(index) = self.words.iter().position(|w| *w == target) else {
            crate::debug!("Remove '{}' ignored, word not in store", target);
            return false;
        };

        Arc::make_mut(&mut self.words).remove(index);
        crate::info!("Removed '{}', {} words remain", target, self.words.len());

        self.resection();
        self.rederive();
        true
    }

    /// Set the active query and derive the matching view inline
    pub fn set_query(&mut self, query: &str) -> Arc<DictionarySnapshot> {
        self.query = query.to_string();
        self.rederive()
    }

    /// Record `query` as active and hand back the words to search.
    ///
    /// An empty query publishes the sectioned view immediately and returns
    /// `None`. Otherwise the caller runs the search and passes the result to
    /// [`DictionaryStore::publish_search`].
    pub fn begin_search(&mut self, query: &str) -> Option<Arc<Vec<String>>> {
        self.query = query.to_string();
        if self.query.is_empty() {
            self.publish(self.sectioned.clone());
            None
        } else {
            Some(self.words.clone())
        }
    }

    /// Publish a search result computed outside the store
    pub fn publish_search(&mut self, snapshot: DictionarySnapshot) -> Arc<DictionarySnapshot> {
        self.publish(Arc::new(snapshot))
    }

    fn resection(&mut self) {
        self.sectioned = Arc::new(section(&self.words, &self.alphabet, self.header_match));
    }

    fn rederive(&mut self) -> Arc<DictionarySnapshot> {
        let next = if self.query.is_empty() {
            self.sectioned.clone()
        } else {
            Arc::new(search(&self.words, &self.query))
        };
        self.publish(next)
    }

    fn publish(&mut self, snapshot: Arc<DictionarySnapshot>) -> Arc<DictionarySnapshot> {
        self.version += 1;
        self.current = snapshot;
        self.current.clone()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
