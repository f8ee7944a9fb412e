// Word list download functionality
// Contains the core download logic, testable independently from the pipeline

use crate::events::{DictionaryEventEmitter, FetchProgressPayload};
use crate::{debug, info, warn};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Download progress reporting interval in bytes (1MB)
const FETCH_PROGRESS_INTERVAL: u64 = 1_000_000;

/// Error types for fetching the word list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    /// Local file could not be written
    #[error("I/O error: {0}")]
    Io(String),
}

/// A remote origin of raw word list bytes
/// Allows mocking in tests while using a real HTTP client in production
#[async_trait]
pub trait WordListSource: Send + Sync {
    /// Retrieve the full word list body in a single attempt
    async fn fetch(&self, emitter: &dyn DictionaryEventEmitter) -> Result<Vec<u8>, FetchError>;
}

/// Word list served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpWordListSource {
    client: reqwest::Client,
    url: String,
}

impl HttpWordListSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WordListSource for HttpWordListSource {
    async fn fetch(&self, emitter: &dyn DictionaryEventEmitter) -> Result<Vec<u8>, FetchError> {
        use futures_util::StreamExt;

        debug!("Requesting word list from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http {
                status: response.status().as_u16(),
            });
        }

        // Content-Length only feeds progress totals, never the buffer size
        let total_bytes = response.content_length();
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        let mut last_emit: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                FetchError::Network(format!(
                    "Download failed after {} bytes: {}",
                    body.len(),
                    e
                ))
            })?;
            body.extend_from_slice(&chunk);

            let downloaded = body.len() as u64;
            if downloaded - last_emit >= FETCH_PROGRESS_INTERVAL {
                emitter.emit_fetch_progress(FetchProgressPayload {
                    bytes_downloaded: downloaded,
                    total_bytes,
                });
                last_emit = downloaded;
            }
        }

        // Final progress emit
        emitter.emit_fetch_progress(FetchProgressPayload {
            bytes_downloaded: body.len() as u64,
            total_bytes,
        });

        Ok(body)
    }
}

/// Temp file next to `path` so the final rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}-{}.tmp", name, uuid::Uuid::new_v4()))
}

/// Write `contents` to `path` via temp file + rename
async fn write_replacing(path: &Path, contents: &[u8]) -> Result<(), FetchError> {
    use tokio::io::AsyncWriteExt;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FetchError::Io(format!("Failed to create directory: {}", e)))?;
    }

    let temp_path = temp_path_for(path);
    let written = async {
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        file.sync_all().await?;
        Ok::<(), std::io::Error>(())
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(FetchError::Io(format!("Failed to write: {}", e)));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(FetchError::Io(format!("Failed to rename: {}", e)));
    }

    Ok(())
}

/// Download the word list from `source` and store it at `path`.
///
/// Any existing file is replaced. The body is decoded as UTF-8 with invalid
/// sequences replaced before writing. Single attempt, no retry.
pub async fn fetch_word_list<S>(
    source: &S,
    path: &Path,
    emitter: &dyn DictionaryEventEmitter,
) -> Result<(), FetchError>
where
    S: WordListSource + ?Sized,
{
    info!("Fetching word list to {:?}", path);

    let body = source.fetch(emitter).await?;
    let text = String::from_utf8_lossy(&body);
    if matches!(text, std::borrow::Cow::Owned(_)) {
        warn!("Word list contained invalid UTF-8, replaced with U+FFFD");
    }

    write_replacing(path, text.as_bytes()).await?;

    info!("Word list saved to {:?} ({} bytes)", path, text.len());
    Ok(())
}

#[cfg(test)]
#[path = "download_test.rs"]
mod tests;
