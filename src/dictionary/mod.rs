// Dictionary module - loading, alphabet sectioning, search and the word store

pub mod loader;
mod search;
mod sectioner;
mod store;
mod types;

pub use loader::{load, parse_words, LoadError, DELIMITER};
pub use search::search;
pub use sectioner::section;
pub use store::DictionaryStore;
pub use types::{
    capitalize, Alphabet, DictionarySnapshot, HeaderMatch, Section, DEFAULT_ALPHABET,
};

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
