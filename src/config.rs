// Pipeline configuration
// Source location, on-disk location and the sectioning rules

use crate::dictionary::{Alphabet, HeaderMatch};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remote word list fetched when no local copy exists
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/dwyl/english-words/blob/master/words_alpha.txt?raw=true";

/// Error types for configuration lookups
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Per-user document directory could not be determined
    #[error("Document directory not found")]
    DataDirNotFound,
    /// Source URL is malformed or has no file name to store under
    #[error("Invalid source URL '{0}'")]
    InvalidSourceUrl(String),
}

/// Configuration for the dictionary pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryConfig {
    /// URL of the `\r\n` delimited word list
    pub source_url: String,
    /// Directory holding the local copy; `None` uses the user's document directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Ordered section headers
    #[serde(default)]
    pub alphabet: Alphabet,
    /// How a word's first character is compared against section headers
    #[serde(default)]
    pub header_match: HeaderMatch,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            data_dir: None,
            alphabet: Alphabet::default(),
            header_match: HeaderMatch::default(),
        }
    }
}

impl DictionaryConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_header_match(mut self, header_match: HeaderMatch) -> Self {
        self.header_match = header_match;
        self
    }

    /// Directory the word list is stored in
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::document_dir().ok_or(ConfigError::DataDirNotFound),
        }
    }

    /// File name derived from the last path segment of the source URL
    ///
    /// Query and fragment are ignored, so `.../words_alpha.txt?raw=true`
    /// yields `words_alpha.txt`.
    pub fn file_name(&self) -> Result<String, ConfigError> {
        let invalid = || ConfigError::InvalidSourceUrl(self.source_url.clone());
        let url = reqwest::Url::parse(&self.source_url).map_err(|_| invalid())?;
        url.path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(invalid)
    }

    /// Full path of the local word list
    pub fn local_path(&self) -> Result<PathBuf, ConfigError> {
        let name = self.file_name()?;
        Ok(self.data_dir()?.join(name))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
