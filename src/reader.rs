use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::example::EXAMPLE_TEXT;

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    /// Bundled example text
    Example,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
            Self::Example => write!(f, "<example>"),
        }
    }
}

/// Statistics for one read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async reader that loads whole inputs as UTF-8 text
pub struct AsyncInputReader {
    config: ReaderConfig,
}

impl AsyncInputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read one input. On failure the error is recorded in the stats and an empty
    /// text is returned, unless fail_fast is set.
    pub async fn read_input(&self, source: &InputSource) -> Result<(String, ReadStats)> {
        let start_time = std::time::Instant::now();
        debug!("Starting async read of {}", source);

        let outcome = match source {
            InputSource::File(path) => self.read_file(path).await,
            InputSource::Stdin => self.read_stdin().await,
            InputSource::Example => Ok(EXAMPLE_TEXT.to_string()),
        };

        let duration_ms = start_time.elapsed().as_millis() as u64;

        match outcome {
            Ok(text) => {
                let stats = ReadStats {
                    source: source.to_string(),
                    bytes_read: text.len() as u64,
                    duration_ms,
                    read_error: None,
                };
                info!("Read {}: {} bytes in {}ms", source, stats.bytes_read, duration_ms);
                Ok((text, stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read {source}: {e}");
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    source: source.to_string(),
                    bytes_read: 0,
                    duration_ms,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }

    /// Read several inputs in order
    pub async fn read_inputs_batch(&self, sources: &[InputSource]) -> Result<Vec<(String, ReadStats)>> {
        info!("Starting batch read of {} inputs", sources.len());

        let mut results = Vec::with_capacity(sources.len());
        // WHY: sequential reads keep output order equal to input order
        for source in sources {
            results.push(self.read_input(source).await?);
        }

        info!("Completed batch read of {} inputs", results.len());
        Ok(results)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        let file = tokio::fs::File::open(path).await?;
        // WHY: BufReader with custom buffer size reduces syscalls and improves throughput
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        read_utf8(reader).await
    }

    async fn read_stdin(&self) -> Result<String> {
        let reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        read_utf8(reader).await
    }
}

async fn read_utf8<R: tokio::io::AsyncRead + Unpin>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    let text = String::from_utf8(bytes)
        .map_err(|e| anyhow::anyhow!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_read_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncInputReader::new(ReaderConfig::default());

        let content = "Line one.\nLine two!\n";
        let path = create_test_file(temp_dir.path(), "input.txt", content.as_bytes()).await.unwrap();

        let (text, stats) = reader.read_input(&InputSource::File(path)).await.unwrap();
        assert_eq!(text, content);
        assert_eq!(stats.bytes_read, content.len() as u64);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_read_missing_file_continues() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncInputReader::new(ReaderConfig { fail_fast: false, ..Default::default() });

        let source = InputSource::File(temp_dir.path().join("missing.txt"));
        let (text, stats) = reader.read_input(&source).await.unwrap();
        assert!(text.is_empty());
        assert_eq!(stats.bytes_read, 0);
        assert!(stats.read_error.is_some());
    }

    #[tokio::test]
    async fn test_read_missing_file_fail_fast() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncInputReader::new(ReaderConfig { fail_fast: true, ..Default::default() });

        let source = InputSource::File(temp_dir.path().join("missing.txt"));
        assert!(reader.read_input(&source).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncInputReader::new(ReaderConfig::default());

        let path = create_test_file(temp_dir.path(), "bad.txt", &[b'o', b'k', 0xFF, 0xFE]).await.unwrap();
        let (_, stats) = reader.read_input(&InputSource::File(path)).await.unwrap();
        let error = stats.read_error.expect("expected UTF-8 error");
        assert!(error.contains("invalid UTF-8 at byte 2"), "unexpected error: {error}");
    }

    #[tokio::test]
    async fn test_read_example() {
        let reader = AsyncInputReader::new(ReaderConfig::default());
        let (text, stats) = reader.read_input(&InputSource::Example).await.unwrap();
        assert_eq!(text, EXAMPLE_TEXT);
        assert_eq!(stats.source, "<example>");
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_small_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let reader = AsyncInputReader::new(ReaderConfig { fail_fast: false, buffer_size: 16 });

        let long = "word ".repeat(100) + "end.";
        let first = create_test_file(temp_dir.path(), "a.txt", long.as_bytes()).await.unwrap();
        let second = create_test_file(temp_dir.path(), "b.txt", b"Second.").await.unwrap();

        let sources = vec![
            InputSource::File(first),
            InputSource::File(temp_dir.path().join("missing.txt")),
            InputSource::File(second),
        ];
        let results = reader.read_inputs_batch(&sources).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, long);
        assert!(results[1].1.read_error.is_some());
        assert_eq!(results[2].0, "Second.");
    }
}
