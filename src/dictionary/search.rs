// Live search over the full word list

use super::types::{DictionarySnapshot, Section};

/// Filter `words` to those containing `query`, ignoring case.
///
/// The result is a single header-less section in input order. An empty
/// query matches everything; callers show the sectioned view instead.
pub fn search(words: &[String], query: &str) -> DictionarySnapshot {
    let needle = query.to_lowercase();
    let matches: Vec<String> = words
        .iter()
        .filter(|word| word.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    crate::debug!("Search '{}' matched {} of {} words", query, matches.len(), words.len());
    DictionarySnapshot::new(vec![Section::search_results(matches)])
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
