// Word list fetching
// Downloads the remote word list and stores it next to the other user documents

pub mod download;

pub use download::{fetch_word_list, FetchError, HttpWordListSource, WordListSource};
