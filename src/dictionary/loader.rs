// Word list loader - reads the local file into the ordered WordStore contents

use std::io::ErrorKind;
use std::path::Path;

/// Record delimiter of the word list
pub const DELIMITER: &str = "\r\n";

/// Error types for reading the local word list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// No file at the given path
    #[error("Word list not found at {0}")]
    NotFound(String),
    /// File contents are not valid UTF-8
    #[error("Word list is not valid UTF-8: {0}")]
    DecodeFailure(String),
    /// Any other read failure
    #[error("Failed to read word list: {0}")]
    IoFailure(String),
}

/// Characters treated as line breaks when trimming the end of the file
fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split word list text into words.
///
/// Trailing line breaks are trimmed from the whole text first, then the
/// remainder is split on `\r\n`. Nothing is filtered, sorted or deduplicated.
pub fn parse_words(text: &str) -> Vec<String> {
    text.trim_end_matches(is_newline)
        .split(DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Read and split the word list at `path`
pub fn load(path: &Path) -> Result<Vec<String>, LoadError> {
    crate::debug!("Loading word list from {:?}", path);

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
        _ => LoadError::IoFailure(e.to_string()),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| LoadError::DecodeFailure(e.to_string()))?;
    let words = parse_words(&text);

    crate::info!("Loaded {} words from {:?}", words.len(), path);
    Ok(words)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
