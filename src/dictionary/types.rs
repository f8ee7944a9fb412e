// Dictionary data model shared by the sectioner, search and store

use serde::{Deserialize, Serialize};

/// Section headers of the canonical view, in display order.
///
/// Ships without 'w'; kept as data so the omission stays visible and testable.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvxyz";

/// Ordered set of single-character section headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn new(letters: &str) -> Self {
        Self(letters.chars().collect())
    }

    pub fn letters(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// Uppercased headers for a section index sidebar
    pub fn index_titles(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_uppercase().to_string()).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl From<String> for Alphabet {
    fn from(letters: String) -> Self {
        Self::new(&letters)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.0.into_iter().collect()
    }
}

/// How a word's first character is compared with section headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderMatch {
    /// Literal comparison; capitalized words match no lowercase header
    #[default]
    Exact,
    /// First character is lowercased before lookup
    Lowercase,
}

/// A group of words under one header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Header character; `None` marks the synthetic search results section
    pub header: Option<char>,
    /// Words in pipeline input order
    pub words: Vec<String>,
}

impl Section {
    pub fn new(header: char) -> Self {
        Self {
            header: Some(header),
            words: Vec::new(),
        }
    }

    pub fn search_results(words: Vec<String>) -> Self {
        Self {
            header: None,
            words,
        }
    }

    /// Uppercased header for display, `None` for search results
    pub fn title(&self) -> Option<String> {
        self.header.map(|c| c.to_uppercase().to_string())
    }
}

/// A complete, displayable sectioning or search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionarySnapshot {
    pub sections: Vec<Section>,
}

impl DictionarySnapshot {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// True when this snapshot is a single synthetic search section
    pub fn is_search_result(&self) -> bool {
        matches!(self.sections.as_slice(), [section] if section.header.is_none())
    }

    /// Total number of words across all sections
    pub fn word_count(&self) -> usize {
        self.sections.iter().map(|s| s.words.len()).sum()
    }

    /// Section with the given header, if present
    pub fn section(&self, header: char) -> Option<&Section> {
        self.sections.iter().find(|s| s.header == Some(header))
    }
}

/// Display form of a word: first letter uppercase, the rest lowercase
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
